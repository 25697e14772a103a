//! Export command implementation
//!
//! This module implements the `export` command, which writes every
//! organization's documents into one ZIP archive.

use crate::config::{load_config, CasefileConfig};
use crate::core::export::{ExportOutcome, ExportRun};
use crate::log_error_with_context;
use clap::Args;

/// Number of individual failures printed before the list is truncated
const MAX_LISTED_FAILURES: usize = 10;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Override the directory the archive is written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Override the client label used in the archive name
    #[arg(long, value_name = "LABEL")]
    pub client: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                log_error_with_context!(&e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(e.exit_code());
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        println!("🚀 Starting export for client '{}'...", config.application.client);
        println!();

        let run = match ExportRun::from_config(config) {
            Ok(r) => r,
            Err(e) => {
                log_error_with_context!(&e, "Failed to initialize export");
                eprintln!("Failed to initialize export: {e}");
                return Ok(e.exit_code());
            }
        };

        let outcome = match run.run().await {
            Ok(o) => o,
            Err(e) => {
                log_error_with_context!(&e, "Export failed");
                eprintln!("❌ Export failed: {e}");
                return Ok(e.exit_code());
            }
        };

        print_outcome(&outcome);

        let exit_code = if outcome.is_successful() {
            println!("✅ Export completed successfully!");
            0
        } else {
            println!("⚠️  Export completed with failures");
            1
        };

        Ok(exit_code)
    }

    /// Apply CLI overrides on top of the loaded configuration
    fn apply_overrides(&self, config: &mut CasefileConfig) {
        if let Some(output_dir) = &self.output_dir {
            tracing::info!(output_dir = %output_dir, "Overriding output directory from CLI");
            config.export.output_dir = output_dir.clone();
        }

        if let Some(client) = &self.client {
            tracing::info!(client = %client, "Overriding client label from CLI");
            config.application.client = client.clone();
        }
    }
}

fn print_outcome(outcome: &ExportOutcome) {
    println!();
    println!("📊 Export Summary:");
    if let Some(path) = &outcome.archive_path {
        println!("  Archive: {}", path.display());
    }
    println!("  Organizations: {}", outcome.organizations_total);
    println!("  Processed: {}", outcome.organizations_processed);
    println!(
        "  Without Documents: {}",
        outcome.organizations_without_documents
    );
    println!("  Skipped: {}", outcome.organizations_skipped.len());
    println!("  Documents Saved: {}", outcome.documents_saved);
    println!("  Documents Failed: {}", outcome.documents_failed.len());
    println!("  Duration: {:.2}s", outcome.duration.as_secs_f64());
    println!();

    if !outcome.organizations_skipped.is_empty() {
        println!("⚠️  Skipped organizations:");
        for skipped in outcome.organizations_skipped.iter().take(MAX_LISTED_FAILURES) {
            println!("  - {} (id {}): {}", skipped.name, skipped.id, skipped.reason);
        }
        if outcome.organizations_skipped.len() > MAX_LISTED_FAILURES {
            println!(
                "  ... and {} more",
                outcome.organizations_skipped.len() - MAX_LISTED_FAILURES
            );
        }
        println!();
    }

    if !outcome.documents_failed.is_empty() {
        println!("⚠️  Failed documents:");
        for failed in outcome.documents_failed.iter().take(MAX_LISTED_FAILURES) {
            println!(
                "  - document {} (organization {}): {}",
                failed.document_id, failed.organization_id, failed.reason
            );
        }
        if outcome.documents_failed.len() > MAX_LISTED_FAILURES {
            println!(
                "  ... and {} more",
                outcome.documents_failed.len() - MAX_LISTED_FAILURES
            );
        }
        println!();
    }
}
