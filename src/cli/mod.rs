//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Casefile using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Casefile - legal-records document export tool
#[derive(Parser, Debug)]
#[command(name = "casefile")]
#[command(version, about, long_about = None)]
#[command(author = "Casefile Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "casefile.toml", env = "CASEFILE_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CASEFILE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export every organization's documents into one ZIP archive
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["casefile", "export"]);
        assert_eq!(cli.config, "casefile.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_export_overrides() {
        let cli = Cli::parse_from([
            "casefile",
            "export",
            "--output-dir",
            "/srv/exports",
            "--client",
            "globex",
        ]);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.output_dir.as_deref(), Some("/srv/exports"));
                assert_eq!(args.client.as_deref(), Some("globex"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["casefile", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["casefile", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["casefile", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["casefile", "init", "--force"]);
        match cli.command {
            Commands::Init(args) => {
                assert!(args.force);
                assert_eq!(args.output, "casefile.toml");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
