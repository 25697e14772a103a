//! External system integrations for Casefile.
//!
//! This module provides adapters for the systems an export talks to:
//!
//! - [`legalstudio`] - the legal-records REST API and its OAuth2 token endpoint
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies and
//! enable testing with mock implementations. Each remote capability is a
//! trait, so the export run can be driven by in-memory fakes.
//!
//! ```rust,no_run
//! use casefile::adapters::legalstudio::{BearerToken, LegalStudioClient, OrganizationLister};
//! use casefile::config::ApiConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LegalStudioClient::new(&ApiConfig::default())?;
//! let token = BearerToken::new("eyJhbGciOi...");
//! let organizations = client.list_organizations(&token).await?;
//! println!("{} organizations", organizations.len());
//! # Ok(())
//! # }
//! ```

pub mod legalstudio;
