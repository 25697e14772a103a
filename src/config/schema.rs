//! Configuration schema types
//!
//! This module defines the configuration structure for Casefile. Every value
//! the export needs is carried here explicitly; nothing in the core reads the
//! process environment.

use crate::config::secret::{secret_string, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

/// Main Casefile configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CasefileConfig {
    /// Application-level settings
    pub application: ApplicationConfig,

    /// Client-credentials exchange settings
    pub auth: AuthConfig,

    /// Records service settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CasefileConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.auth.validate()?;
        self.api.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Client label, used to name the archive
    #[serde(default)]
    pub client: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.client.trim().is_empty() {
            return Err("application.client cannot be empty".to_string());
        }

        if self
            .client
            .chars()
            .any(|c| matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        {
            return Err(format!(
                "application.client '{}' contains characters that are not allowed in a file name",
                self.client
            ));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Client-credentials configuration for the authorization server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Token endpoint URL
    #[serde(default)]
    pub endpoint: String,

    /// OAuth client id
    #[serde(default)]
    pub client_id: String,

    /// OAuth client secret
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default = "default_empty_secret")]
    pub client_secret: SecretString,

    /// Audience the token is requested for
    #[serde(default)]
    pub audience: String,
}

/// Names of the client-credential fields that are blank
///
/// The secret is checked untrimmed; any other value counts as blank when only
/// whitespace is left.
pub fn blank_credential_fields(
    endpoint: &str,
    client_id: &str,
    client_secret: &SecretString,
    audience: &str,
) -> Vec<&'static str> {
    use secrecy::ExposeSecret;

    let mut missing = Vec::new();
    if endpoint.trim().is_empty() {
        missing.push("endpoint");
    }
    if client_id.trim().is_empty() {
        missing.push("client_id");
    }
    if client_secret.expose_secret().is_empty() {
        missing.push("client_secret");
    }
    if audience.trim().is_empty() {
        missing.push("audience");
    }
    missing
}

impl AuthConfig {
    /// Names of required settings that are blank
    pub fn missing_fields(&self) -> Vec<String> {
        blank_credential_fields(
            &self.endpoint,
            &self.client_id,
            &self.client_secret,
            &self.audience,
        )
        .into_iter()
        .map(|field| format!("auth.{field}"))
        .collect()
    }

    fn validate(&self) -> Result<(), String> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(format!(
                "Missing required settings: {}",
                missing.join(", ")
            ));
        }

        validate_http_url("auth.endpoint", &self.endpoint)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            client_id: String::new(),
            client_secret: default_empty_secret(),
            audience: String::new(),
        }
    }
}

/// Records service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the records API (e.g. `https://app.legalstudio.be/api/v1`)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS certificate verification enabled
    ///
    /// **SECURITY WARNING**: disabling this exposes the export to
    /// man-in-the-middle attacks. Only use it against test servers.
    #[serde(default = "default_true")]
    pub tls_verify: bool,
}

impl ApiConfig {
    fn validate(&self) -> Result<(), String> {
        validate_http_url("api.base_url", &self.base_url)?;

        if self.timeout_seconds == 0 {
            return Err("api.timeout_seconds must be > 0".to_string());
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            tls_verify: true,
        }
    }
}

/// Compression applied to archive entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    /// Deflate-compressed entries
    #[default]
    Deflated,
    /// Entries stored without compression
    Stored,
}

impl std::str::FromStr for Compression {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deflated" => Ok(Compression::Deflated),
            "stored" => Ok(Compression::Stored),
            other => Err(format!(
                "Invalid export.compression '{other}'. Must be one of: deflated, stored"
            )),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory the archive is written to (created if missing)
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Entry compression
    #[serde(default)]
    pub compression: Compression,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            compression: Compression::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable the durable per-run log file
    #[serde(default = "default_true")]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: true,
            local_path: default_local_path(),
        }
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| format!("{field} is not a valid URL: {e}"))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("{field} must start with http:// or https://"));
    }
    Ok(())
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_empty_secret() -> SecretString {
    secret_string(String::new())
}

fn default_base_url() -> String {
    "https://app.legalstudio.be/api/v1".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_true() -> bool {
    true
}

fn default_output_dir() -> String {
    "exports".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}
