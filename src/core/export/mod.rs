//! Export orchestration and archive assembly
//!
//! This module provides the core export logic for Casefile, including:
//! - The archive path rule (pure, no I/O)
//! - Streaming archive assembly with per-document failure isolation
//! - Run coordination and outcome reporting

pub mod archive;
pub mod naming;
pub mod outcome;
pub mod run;

#[cfg(test)]
pub(crate) mod testing;

pub use archive::ArchiveBuilder;
pub use outcome::{ExportOutcome, FailedDocument, OrganizationOutcome, SkippedOrganization};
pub use run::ExportRun;
