//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "casefile.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Casefile configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} and set application.client", self.output);
                println!("  2. Create a .env file with your credentials:");
                println!("     - API_AUTH_URL, CLIENT_ID, CLIENT_SECRET, AUDIENCE");
                println!("  3. Validate configuration: casefile validate-config");
                println!("  4. Run export: casefile export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Sample configuration with every section and its defaults
    fn sample_config() -> &'static str {
        r#"# Casefile Configuration File
# Exports every organization's documents from the records service into one
# ZIP archive.

[application]
# Client label, used in the archive name: {client}_documents_{timestamp}.zip
client = "my-firm"

# Log level (trace, debug, info, warn, error)
log_level = "info"

[auth]
# OAuth2 client-credentials exchange (values come from the environment)
endpoint = "${API_AUTH_URL}"
client_id = "${CLIENT_ID}"
client_secret = "${CLIENT_SECRET}"
audience = "${AUDIENCE}"

[api]
base_url = "https://app.legalstudio.be/api/v1"
timeout_seconds = 60
tls_verify = true

[export]
# Directory the archive is written to (created if missing)
output_dir = "exports"

# Entry compression: deflated or stored
compression = "deflated"

[logging]
# One JSON log file per run: {local_path}/document_export_{timestamp}.log
local_enabled = true
local_path = "logs"
"#
    }
}
