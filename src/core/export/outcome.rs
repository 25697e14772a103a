//! Export outcome and reporting
//!
//! This module defines the accumulator threaded through an export run and the
//! records it keeps for skipped organizations and failed documents.

use crate::domain::{DocumentId, Organization, OrganizationId};
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::time::Duration;

/// Saved and failed counts for one organization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrganizationOutcome {
    /// Documents written to the archive
    pub saved: usize,

    /// Documents whose fetch failed
    pub failed: usize,
}

impl OrganizationOutcome {
    /// Number of documents attempted
    pub fn attempted(&self) -> usize {
        self.saved + self.failed
    }
}

/// An organization whose document listing failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedOrganization {
    /// Organization identifier
    pub id: OrganizationId,

    /// Organization name as listed
    pub name: String,

    /// Why the organization was skipped
    pub reason: String,
}

impl SkippedOrganization {
    /// Create a new skip record
    pub fn new(organization: &Organization, reason: impl Into<String>) -> Self {
        Self {
            id: organization.id,
            name: organization.name.clone(),
            reason: reason.into(),
        }
    }
}

/// A document whose content could not be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDocument {
    /// Owning organization
    pub organization_id: OrganizationId,

    /// Document identifier
    pub document_id: DocumentId,

    /// Error message
    pub reason: String,
}

impl FailedDocument {
    /// Create a new failure record
    pub fn new(
        organization_id: OrganizationId,
        document_id: DocumentId,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            organization_id,
            document_id,
            reason: reason.into(),
        }
    }
}

/// Summary of one export run
///
/// Built up while the run progresses and returned once, after the archive is
/// closed.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// Client label the archive was named after
    pub client: String,

    /// Path of the written archive
    pub archive_path: Option<PathBuf>,

    /// Run start time
    pub started_at: DateTime<Local>,

    /// Duration of the run
    pub duration: Duration,

    /// Organizations returned by the listing
    pub organizations_total: usize,

    /// Organizations whose document listing succeeded, empty ones included
    pub organizations_processed: usize,

    /// Processed organizations that listed no documents
    pub organizations_without_documents: usize,

    /// Organizations whose document listing failed
    pub organizations_skipped: Vec<SkippedOrganization>,

    /// Documents written to the archive
    pub documents_saved: usize,

    /// Documents whose fetch failed
    pub documents_failed: Vec<FailedDocument>,
}

impl ExportOutcome {
    /// Create a new empty outcome
    pub fn new(client: impl Into<String>, started_at: DateTime<Local>) -> Self {
        Self {
            client: client.into(),
            archive_path: None,
            started_at,
            duration: Duration::from_secs(0),
            organizations_total: 0,
            organizations_processed: 0,
            organizations_without_documents: 0,
            organizations_skipped: Vec::new(),
            documents_saved: 0,
            documents_failed: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the archive path
    pub fn with_archive_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.archive_path = Some(path.into());
        self
    }

    /// Record a processed organization
    ///
    /// Saved documents are counted separately as each entry is written.
    pub fn add_processed(&mut self) {
        self.organizations_processed += 1;
    }

    /// Record a document written to the archive
    pub fn add_saved_document(&mut self) {
        self.documents_saved += 1;
    }

    /// Record a processed organization that listed no documents
    pub fn add_without_documents(&mut self) {
        self.organizations_processed += 1;
        self.organizations_without_documents += 1;
    }

    /// Record a skipped organization
    pub fn add_skipped(&mut self, skipped: SkippedOrganization) {
        self.organizations_skipped.push(skipped);
    }

    /// Record a failed document
    pub fn add_failed_document(&mut self, failed: FailedDocument) {
        self.documents_failed.push(failed);
    }

    /// Number of entries in the archive
    pub fn entries_written(&self) -> usize {
        self.documents_saved
    }

    /// Check if the run finished without scoped failures
    pub fn is_successful(&self) -> bool {
        self.organizations_skipped.is_empty() && self.documents_failed.is_empty()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            client = %self.client,
            archive = ?self.archive_path,
            organizations_total = self.organizations_total,
            organizations_processed = self.organizations_processed,
            organizations_without_documents = self.organizations_without_documents,
            organizations_skipped = self.organizations_skipped.len(),
            documents_saved = self.documents_saved,
            documents_failed = self.documents_failed.len(),
            duration_secs = self.duration.as_secs(),
            "Export completed"
        );

        if !self.is_successful() {
            tracing::warn!(
                organizations_skipped = self.organizations_skipped.len(),
                documents_failed = self.documents_failed.len(),
                "Export completed with errors"
            );
            for skipped in &self.organizations_skipped {
                tracing::warn!(
                    organization_id = %skipped.id,
                    organization = %skipped.name,
                    reason = %skipped.reason,
                    "Skipped organization"
                );
            }
            for failed in &self.documents_failed {
                tracing::warn!(
                    organization_id = %failed.organization_id,
                    document_id = %failed.document_id,
                    reason = %failed.reason,
                    "Failed document"
                );
            }
        }
    }
}
