//! Configuration loader with TOML parsing and environment variable overrides
//!
//! Loading happens once, at startup, in the binary. The resulting
//! [`CasefileConfig`] is passed explicitly into the export; the core never
//! looks credentials up on its own.

use super::schema::{CasefileConfig, Compression};
use super::secret::secret_string;
use crate::domain::errors::CasefileError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into CasefileConfig
/// 4. Applies environment variable overrides (CASEFILE_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Every failure is a [`CasefileError::Configuration`]: a missing file, a
/// referenced variable that is not set, a TOML syntax error, or a required
/// setting that is absent.
///
/// # Examples
///
/// ```no_run
/// use casefile::config::loader::load_config;
///
/// let config = load_config("casefile.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CasefileConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CasefileError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        CasefileError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses, overrides and validates configuration from TOML text
pub fn parse_config(contents: &str) -> Result<CasefileConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: CasefileConfig = toml::from_str(&contents)
        .map_err(|e| CasefileError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        CasefileError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error naming every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| CasefileError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        // Comments may mention ${VAR} without it being required
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(CasefileError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using CASEFILE_* prefix
///
/// Environment variables follow the pattern: CASEFILE_<SECTION>_<KEY>
/// For example: CASEFILE_AUTH_CLIENT_ID, CASEFILE_EXPORT_OUTPUT_DIR
fn apply_env_overrides(config: &mut CasefileConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("CASEFILE_APPLICATION_CLIENT") {
        config.application.client = val;
    }
    if let Ok(val) = std::env::var("CASEFILE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Auth overrides
    if let Ok(val) = std::env::var("CASEFILE_AUTH_ENDPOINT") {
        config.auth.endpoint = val;
    }
    if let Ok(val) = std::env::var("CASEFILE_AUTH_CLIENT_ID") {
        config.auth.client_id = val;
    }
    if let Ok(val) = std::env::var("CASEFILE_AUTH_CLIENT_SECRET") {
        config.auth.client_secret = secret_string(val);
    }
    if let Ok(val) = std::env::var("CASEFILE_AUTH_AUDIENCE") {
        config.auth.audience = val;
    }

    // API overrides
    if let Ok(val) = std::env::var("CASEFILE_API_BASE_URL") {
        config.api.base_url = val;
    }
    if let Ok(val) = std::env::var("CASEFILE_API_TIMEOUT_SECONDS") {
        config.api.timeout_seconds = parse_override("CASEFILE_API_TIMEOUT_SECONDS", &val)?;
    }
    if let Ok(val) = std::env::var("CASEFILE_API_TLS_VERIFY") {
        config.api.tls_verify = parse_override("CASEFILE_API_TLS_VERIFY", &val)?;
    }

    // Export overrides
    if let Ok(val) = std::env::var("CASEFILE_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }
    if let Ok(val) = std::env::var("CASEFILE_EXPORT_COMPRESSION") {
        config.export.compression =
            Compression::from_str(&val).map_err(CasefileError::Configuration)?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("CASEFILE_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_override("CASEFILE_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("CASEFILE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

fn parse_override<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| {
        CasefileError::Configuration(format!("Invalid value '{value}' for {name}: {e}"))
    })
}
