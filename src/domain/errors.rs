//! Domain error types
//!
//! This module defines the error hierarchy for Casefile. Errors fall into two
//! groups: fatal ones that end a run (configuration, authentication, archive
//! I/O) and scoped ones ([`FetchError`]) that only ever affect a single
//! organization or document.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Casefile error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum CasefileError {
    /// Missing or invalid settings, detected before any network call
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Token exchange failed
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthError),

    /// A listing or content call failed
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The archive container could not be created, written or closed
    #[error("Archive error: {0}")]
    Archive(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl CasefileError {
    /// Process exit code for a run that ended with this error
    ///
    /// A [`CasefileError::Fetch`] reaching the top level means the
    /// organization listing itself failed.
    pub fn exit_code(&self) -> i32 {
        match self {
            CasefileError::Configuration(_) => 2,
            CasefileError::Authentication(_) => 3,
            CasefileError::Fetch(_) => 4,
            _ => 5,
        }
    }
}

/// Token acquisition errors
///
/// Any of these ends the run: nothing can be fetched without a bearer token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// One of the client credentials is absent or blank
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// The authorization server could not be reached
    #[error("Failed to reach authorization server: {0}")]
    ConnectionFailed(String),

    /// The authorization server answered with a non-2xx status
    #[error("Token request rejected: {status} - {message}")]
    Rejected { status: u16, message: String },

    /// The response body was not a usable token document
    #[error("Malformed token response: {0}")]
    MalformedResponse(String),
}

/// Remote fetch errors
///
/// Raised by the organization lister, document lister and document fetcher.
/// During an export these are caught at the boundary of the organization or
/// document they concern and turned into a counted skip.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Failed to connect to the records service
    #[error("Failed to connect to records service: {0}")]
    ConnectionFailed(String),

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Invalid response body
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// A well-formed response lacks a required field
    #[error("Response is missing required field '{0}'")]
    MissingField(String),

    /// Document content could not be decoded
    #[error("Failed to decode document content: {0}")]
    Decode(String),
}

impl FetchError {
    /// Builds the status-specific variant for a non-2xx response
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status >= 500 {
            FetchError::ServerError { status, message }
        } else {
            FetchError::ClientError { status, message }
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for CasefileError {
    fn from(err: std::io::Error) -> Self {
        CasefileError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for CasefileError {
    fn from(err: serde_json::Error) -> Self {
        CasefileError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for CasefileError {
    fn from(err: toml::de::Error) -> Self {
        CasefileError::Configuration(format!("TOML parse error: {err}"))
    }
}
