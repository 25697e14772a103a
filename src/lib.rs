// Casefile - Legal-records document export tool
// Copyright (c) 2025 Casefile Contributors
// Licensed under the MIT License

//! # Casefile - legal-records document export
//!
//! Casefile exports every document held by a remote legal-records service
//! into a single ZIP archive, one folder per organization.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Authenticating** with an OAuth2 client-credentials exchange
//! - **Traversing** organizations and their documents over the records REST API
//! - **Streaming** each fetched document into the archive as soon as it arrives
//! - **Reporting** a per-run outcome: organizations processed or skipped,
//!   documents saved or failed
//!
//! ## Architecture
//!
//! Casefile follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export run, archive assembly, naming)
//! - [`adapters`] - External integrations (records service, token endpoint)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use casefile::config::load_config;
//! use casefile::core::export::ExportRun;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("casefile.toml")?;
//!
//!     // Create and execute the export
//!     let outcome = ExportRun::from_config(config)?.run().await?;
//!
//!     println!("Saved {} documents", outcome.documents_saved);
//!     Ok(())
//! }
//! ```
//!
//! ## Failure isolation
//!
//! A failure listing one organization's documents skips that organization; a
//! failure fetching one document skips that document. Only a missing token, a
//! failed organization listing, or an archive I/O failure ends the run.
//!
//! ## Archive layout
//!
//! ```text
//! acme_documents_20250304_050607.zip
//! ├── Acme Corp/
//! │   ├── contract_10.pdf
//! │   └── report_11.pdf
//! └── GammaInc/
//!     └── notes_20.txt
//! ```
//!
//! Organization names keep only alphanumerics, spaces, hyphens and
//! underscores. Every filename carries its document id, so repeated names
//! never collide.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;

// Re-export commonly used types
pub use domain::{CasefileError, Result};
