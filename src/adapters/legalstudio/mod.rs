//! Records service adapter
//!
//! This module provides the integration with the legal-records REST API and
//! its OAuth2 authorization server: the collaborator contracts, their HTTP
//! implementations, and the wire models.

pub mod auth;
pub mod client;
pub mod models;
pub mod traits;

pub use auth::ClientCredentialsProvider;
pub use client::LegalStudioClient;
pub use traits::{
    BearerToken, ClientCredentials, DocumentFetcher, DocumentLister, OrganizationLister,
    TokenProvider,
};
