//! Core business logic for Casefile.
//!
//! This module contains the export pipeline.
//!
//! # Modules
//!
//! - [`export`] - Export run, archive assembly, naming and outcome reporting
//!
//! # Export Workflow
//!
//! The export workflow:
//!
//! 1. **Authenticate**: Exchange client credentials for a bearer token
//! 2. **List organizations**: Fetch every organization visible to the client
//! 3. **Open archive**: Create `{client}_documents_{timestamp}.zip`
//! 4. **Traverse**: For each organization, list its documents and fetch each one
//! 5. **Write**: Stream every fetched document into the archive immediately
//! 6. **Report**: Close the archive and log the outcome
//!
//! A failure listing one organization's documents skips that organization; a
//! failure fetching one document skips that document. Neither touches the
//! archive.
//!
//! # Example
//!
//! ```rust,no_run
//! use casefile::config::load_config;
//! use casefile::core::export::ExportRun;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration
//! let config = load_config("casefile.toml")?;
//!
//! // Create the export run
//! let run = ExportRun::from_config(config)?;
//!
//! // Execute export
//! let outcome = run.run().await?;
//!
//! println!("Saved: {}", outcome.documents_saved);
//! println!("Failed: {}", outcome.documents_failed.len());
//! # Ok(())
//! # }
//! ```

pub mod export;
