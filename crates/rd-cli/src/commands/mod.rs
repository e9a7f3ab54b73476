//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod dash;
pub mod keywords;
pub mod report;
pub mod summary;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rd_core::config::Config;
use rd_core::review::BrandDataset;
use std::path::PathBuf;

/// revdash - Review Analytics Dashboard
#[derive(Debug, Parser)]
#[command(name = "revdash")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Launch the interactive dashboard
    Dash(dash::DashArgs),

    /// Print the brand comparison summary
    Summary(summary::SummaryArgs),

    /// Print ranked keywords per rating
    Keywords(keywords::KeywordsArgs),

    /// Export the full analysis report
    Report(report::ReportArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Dispatch to command handler
    match cli.command {
        Commands::Dash(args) => dash::execute(args, cli.config),
        Commands::Summary(args) => summary::execute(args, cli.config),
        Commands::Keywords(args) => keywords::execute(args, cli.config),
        Commands::Report(args) => report::execute(args, cli.config),
        Commands::Config(cmd) => config::execute(cmd, cli.config),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Resolve the config file location
///
/// Explicit `--config` wins, then `./revdash.toml`, then the per-user
/// config directory.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    let local = PathBuf::from("revdash.toml");
    if local.exists() {
        return local;
    }
    Config::default_path()
}

/// Load and validate the configuration
pub fn load_config(explicit: Option<PathBuf>) -> Result<Config> {
    let path = resolve_config_path(explicit);
    Config::load(&path).with_context(|| {
        format!(
            "failed to load configuration from {} (run 'revdash config init' to create one)",
            path.display()
        )
    })
}

/// Load every configured brand dataset
pub fn load_datasets(config: &Config) -> Result<Vec<BrandDataset>> {
    rd_ingest::load_all(config).context("failed to load review datasets")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_resolve_config_path_explicit_wins() {
        let path = resolve_config_path(Some(PathBuf::from("/tmp/custom.toml")));
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }
}
