//! Archive assembly
//!
//! [`ArchiveBuilder`] owns the ZIP writer for the duration of a run. It fetches
//! each document through a [`DocumentFetcher`], writes the entry immediately,
//! and threads an [`ExportOutcome`] through the traversal. A fetch failure is
//! counted against its document and the loop moves on; only a failure to write
//! the container itself is returned as an error.

use super::naming::entry_path;
use super::outcome::{ExportOutcome, FailedDocument, OrganizationOutcome, SkippedOrganization};
use crate::adapters::legalstudio::{BearerToken, DocumentFetcher};
use crate::config::Compression;
use crate::domain::{ArchiveEntry, CasefileError, DocumentDescriptor, Organization, Result};
use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Streaming ZIP archive builder
///
/// The underlying file is closed exactly once: by [`ArchiveBuilder::finalize`],
/// by [`ArchiveBuilder::abandon`], or by the writer's drop if neither is
/// reached.
pub struct ArchiveBuilder<W: Write + Seek = File> {
    path: PathBuf,
    writer: ZipWriter<W>,
    options: FileOptions,
    written: HashSet<String>,
    outcome: ExportOutcome,
}

impl ArchiveBuilder {
    /// Create a new empty archive at `path`
    ///
    /// Missing parent directories are created. The file itself must not exist
    /// yet.
    ///
    /// # Errors
    ///
    /// Returns [`CasefileError::Archive`] if the directory or the file cannot
    /// be created.
    pub fn open(path: &Path, compression: Compression, outcome: ExportOutcome) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                CasefileError::Archive(format!(
                    "Failed to create output directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| {
                CasefileError::Archive(format!(
                    "Failed to create archive {}: {e}",
                    path.display()
                ))
            })?;

        tracing::debug!(path = %path.display(), compression = ?compression, "Archive opened");

        Ok(Self::from_writer(path, file, compression, outcome))
    }
}

impl<W: Write + Seek> ArchiveBuilder<W> {
    /// Build an archive on an already opened sink
    ///
    /// `path` is the file backing `writer`; [`ArchiveBuilder::abandon`]
    /// removes it when nothing was written.
    pub fn from_writer(
        path: &Path,
        writer: W,
        compression: Compression,
        outcome: ExportOutcome,
    ) -> Self {
        let method = match compression {
            Compression::Deflated => CompressionMethod::Deflated,
            Compression::Stored => CompressionMethod::Stored,
        };

        Self {
            path: path.to_path_buf(),
            writer: ZipWriter::new(writer),
            options: FileOptions::default()
                .compression_method(method)
                .unix_permissions(0o644),
            written: HashSet::new(),
            outcome,
        }
    }

    /// Path of the archive being written
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Outcome accumulated so far
    pub fn outcome(&self) -> &ExportOutcome {
        &self.outcome
    }

    /// Fetch and write every document of one organization
    ///
    /// Documents are attempted in order. A failed fetch is logged and recorded
    /// against its document; the remaining documents are still attempted. No
    /// entry, and therefore no prefix, is created for the organization unless
    /// a document is saved. A document whose entry path was already written
    /// is recorded as failed instead of being written twice.
    ///
    /// # Errors
    ///
    /// Returns [`CasefileError::Archive`] if an entry cannot be written. The
    /// run cannot continue past this. Entries written before the failure are
    /// already counted in the outcome.
    pub async fn record_organization(
        &mut self,
        organization: &Organization,
        documents: &[DocumentDescriptor],
        token: &BearerToken,
        fetcher: &dyn DocumentFetcher,
    ) -> Result<OrganizationOutcome> {
        let mut result = OrganizationOutcome::default();

        for document in documents {
            match fetcher
                .fetch_document(organization.id, document.id, token)
                .await
            {
                Ok(payload) => {
                    let entry = ArchiveEntry::new(
                        entry_path(organization, document.id, &payload.filename),
                        payload.content,
                    );
                    if self.written.contains(&entry.path) {
                        tracing::warn!(
                            organization_id = %organization.id,
                            document_id = %document.id,
                            path = %entry.path,
                            "Entry path already written, not writing it again"
                        );
                        self.outcome.add_failed_document(FailedDocument::new(
                            organization.id,
                            document.id,
                            format!("Duplicate archive path {}", entry.path),
                        ));
                        result.failed += 1;
                        continue;
                    }

                    self.write_entry(&entry)?;
                    self.written.insert(entry.path.clone());
                    self.outcome.add_saved_document();
                    result.saved += 1;

                    tracing::debug!(
                        organization_id = %organization.id,
                        document_id = %document.id,
                        path = %entry.path,
                        bytes = entry.content.len(),
                        "Saved document"
                    );
                }
                Err(e) => {
                    tracing::error!(
                        organization_id = %organization.id,
                        organization = %organization.name,
                        document_id = %document.id,
                        filename = %document.filename,
                        error = %e,
                        "Failed to fetch document"
                    );
                    self.outcome.add_failed_document(FailedDocument::new(
                        organization.id,
                        document.id,
                        e.to_string(),
                    ));
                    result.failed += 1;
                }
            }
        }

        self.outcome.add_processed();
        Ok(result)
    }

    /// Record an organization that listed no documents
    pub fn record_empty(&mut self, organization: &Organization) {
        tracing::info!(
            organization_id = %organization.id,
            organization = %organization.name,
            "No documents for organization"
        );
        self.outcome.add_without_documents();
    }

    /// Record an organization whose document listing failed
    pub fn record_skipped(&mut self, organization: &Organization, reason: impl Into<String>) {
        self.outcome
            .add_skipped(SkippedOrganization::new(organization, reason));
    }

    /// Close the archive and return the outcome
    ///
    /// An archive with no entries is still a valid container.
    ///
    /// # Errors
    ///
    /// Returns [`CasefileError::Archive`] if the central directory cannot be
    /// written.
    pub fn finalize(mut self) -> Result<ExportOutcome> {
        self.writer.finish().map_err(|e| {
            CasefileError::Archive(format!(
                "Failed to finalize archive {}: {e}",
                self.path.display()
            ))
        })?;

        tracing::debug!(
            path = %self.path.display(),
            entries = self.outcome.entries_written(),
            "Archive closed"
        );

        Ok(self.outcome.with_archive_path(self.path))
    }

    /// Close the archive after a fatal error
    ///
    /// Entries already written stay in the container. If nothing was written
    /// the file is removed.
    pub fn abandon(mut self) {
        if let Err(e) = self.writer.finish() {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to close archive");
        }

        if self.outcome.entries_written() == 0 {
            if let Err(e) = fs::remove_file(&self.path) {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove empty archive"
                );
            }
        } else {
            tracing::warn!(
                path = %self.path.display(),
                entries = self.outcome.entries_written(),
                "Archive closed early; entries written so far are kept"
            );
        }
    }

    fn write_entry(&mut self, entry: &ArchiveEntry) -> Result<()> {
        self.writer
            .start_file(entry.path.as_str(), self.options)
            .map_err(|e| {
                CasefileError::Archive(format!("Failed to start entry {}: {e}", entry.path))
            })?;
        self.writer.write_all(&entry.content).map_err(|e| {
            CasefileError::Archive(format!("Failed to write entry {}: {e}", entry.path))
        })?;
        Ok(())
    }
}
