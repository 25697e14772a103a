//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Casefile configuration file.

use crate::config::{load_config, CasefileConfig};
use clap::Args;
use secrecy::ExposeSecret;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading already validates; a failure here covers both parse and
        // validation errors.
        match load_config(config_path) {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!();
                print_summary(&config);
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(e.exit_code())
            }
        }
    }
}

fn print_summary(config: &CasefileConfig) {
    println!("Configuration Summary:");
    println!("  Client: {}", config.application.client);
    println!("  Log Level: {}", config.application.log_level);
    println!("  Token Endpoint: {}", config.auth.endpoint);
    println!("  Client ID: {}", config.auth.client_id);
    println!(
        "  Client Secret: {}",
        redact(config.auth.client_secret.expose_secret().as_str())
    );
    println!("  Audience: {}", config.auth.audience);
    println!("  API Base URL: {}", config.api.base_url);
    println!("  Timeout: {}s", config.api.timeout_seconds);
    println!("  TLS Verify: {}", config.api.tls_verify);
    println!("  Output Directory: {}", config.export.output_dir);
    println!("  Compression: {:?}", config.export.compression);
    if config.logging.local_enabled {
        println!("  Log Directory: {}", config.logging.local_path);
    } else {
        println!("  Log Directory: (disabled)");
    }
    println!();
}

/// Masks a secret for display, keeping only its length visible
fn redact(secret: &str) -> String {
    if secret.is_empty() {
        "(empty)".to_string()
    } else {
        format!("*** ({} chars)", secret.chars().count())
    }
}
