//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output for operators
//! - A JSON-lines durable log per run
//! - Configurable log levels, overridable through `RUST_LOG`
//!
//! # Example
//!
//! ```no_run
//! use casefile::logging::init_logging;
//! use casefile::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(client = "acme", "Starting document export");
//! ```

pub mod structured;

pub use structured::{init_logging, log_file_name, parse_log_level, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use casefile::log_error_with_context;
/// use casefile::domain::CasefileError;
///
/// let error = CasefileError::Configuration("auth.client_id is empty".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
