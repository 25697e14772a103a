//! Document domain models
//!
//! A document moves through three shapes during an export:
//!
//! - [`DocumentDescriptor`] - id and filename, as listed for an organization
//! - [`DocumentPayload`] - the decoded content plus the filename declared by
//!   the fetch call, which is the source of truth for naming
//! - [`ArchiveEntry`] - the uniquely-pathed item written into the archive
//!
//! Payloads and entries are transient: they live from fetch until the archive
//! write returns.

use super::ids::DocumentId;
use serde::{Deserialize, Serialize};

/// Identifies a document before its content is retrieved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    /// Document identifier
    pub id: DocumentId,

    /// Filename as listed; may be empty when the listing omits it
    pub filename: String,
}

impl DocumentDescriptor {
    /// Creates a new document descriptor
    pub fn new(id: impl Into<DocumentId>, filename: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
        }
    }
}

/// The realized content of a document
#[derive(Clone, PartialEq, Eq)]
pub struct DocumentPayload {
    /// Decoded binary content
    pub content: Vec<u8>,

    /// Filename declared by the fetch call
    pub filename: String,
}

impl DocumentPayload {
    /// Creates a new document payload
    pub fn new(content: impl Into<Vec<u8>>, filename: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            filename: filename.into(),
        }
    }
}

// Content is usually a binary blob; keep Debug output readable.
impl std::fmt::Debug for DocumentPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentPayload")
            .field("filename", &self.filename)
            .field("content_len", &self.content.len())
            .finish()
    }
}

/// A materialized entry inside the output archive
///
/// The path is `{sanitized organization}/{stem}_{document id}{extension}`
/// and is unique within one archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path of the entry inside the archive
    pub path: String,

    /// Entry content
    pub content: Vec<u8>,
}

impl ArchiveEntry {
    /// Creates a new archive entry
    pub fn new(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_creation() {
        let descriptor = DocumentDescriptor::new(10, "contract.pdf");
        assert_eq!(descriptor.id, DocumentId::new(10));
        assert_eq!(descriptor.filename, "contract.pdf");
    }

    #[test]
    fn test_payload_debug_hides_content() {
        let payload = DocumentPayload::new(b"secret bytes".to_vec(), "notes.txt");
        let debug = format!("{payload:?}");
        assert!(debug.contains("notes.txt"));
        assert!(debug.contains("content_len: 12"));
        assert!(!debug.contains("secret"));
    }
}
