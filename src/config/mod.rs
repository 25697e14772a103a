//! Configuration management for Casefile.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Casefile uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `CASEFILE_<SECTION>_<KEY>` overrides
//! - Default values for optional settings
//! - Validation that fails fast, before any network call
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - client label and log level
//! - [`AuthConfig`] - client-credentials exchange (all fields required)
//! - [`ApiConfig`] - records service base URL, timeout, TLS
//! - [`ExportConfig`] - output directory and compression
//! - [`LoggingConfig`] - durable log file settings
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! client = "acme"
//! log_level = "info"
//!
//! [auth]
//! endpoint = "${API_AUTH_URL}"
//! client_id = "${CLIENT_ID}"
//! client_secret = "${CLIENT_SECRET}"
//! audience = "${AUDIENCE}"
//!
//! [api]
//! base_url = "https://app.legalstudio.be/api/v1"
//!
//! [export]
//! output_dir = "exports"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, parse_config};
pub use schema::{
    blank_credential_fields, ApiConfig, ApplicationConfig, AuthConfig, CasefileConfig, Compression, ExportConfig,
    LoggingConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
