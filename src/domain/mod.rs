//! Domain models and types for Casefile.
//!
//! This module contains the records that flow through an export and the
//! error taxonomy that decides which failures are fatal.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`OrganizationId`], [`DocumentId`])
//! - **Domain models** ([`Organization`], [`DocumentDescriptor`], [`DocumentPayload`], [`ArchiveEntry`])
//! - **Error types** ([`CasefileError`], [`AuthError`], [`FetchError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, CasefileError>`]:
//!
//! ```rust
//! use casefile::domain::{CasefileError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = casefile::config::load_config("casefile.toml")?;
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod errors;
pub mod ids;
pub mod organization;
pub mod result;

// Re-export commonly used types for convenience
pub use document::{ArchiveEntry, DocumentDescriptor, DocumentPayload};
pub use errors::{AuthError, CasefileError, FetchError};
pub use ids::{DocumentId, OrganizationId};
pub use organization::Organization;
pub use result::Result;
