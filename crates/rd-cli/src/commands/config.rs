//! Config command
//!
//! Manage revdash configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use rd_core::config::Config;
use std::fs;
use std::path::PathBuf;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a starter configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the resolved configuration file path
    Path,

    /// Validate the configuration file
    Validate,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: Option<PathBuf>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(json, config_path),
        ConfigCommand::Init { force } => init_config(force, config_path),
        ConfigCommand::Path => {
            println!("{}", super::resolve_config_path(config_path).display());
            Ok(())
        }
        ConfigCommand::Validate => validate_config(config_path),
    }
}

fn show_config(as_json: bool, config_path: Option<PathBuf>) -> Result<()> {
    let path = super::resolve_config_path(config_path);

    if !path.exists() {
        eprintln!(
            "{} Configuration not found. Run '{}' to create.",
            "⚠".yellow(),
            "revdash config init".cyan()
        );
        return Ok(());
    }

    let content = fs::read_to_string(&path)?;

    if as_json {
        let config: toml::Value = toml::from_str(&content)?;
        let json = serde_json::to_string_pretty(&config)?;
        println!("{}", json);
    } else {
        println!("{}", "Configuration:".bold().underline());
        println!("{}", path.display().to_string().dimmed());
        println!();
        println!("{}", content);
    }

    Ok(())
}

fn init_config(force: bool, config_path: Option<PathBuf>) -> Result<()> {
    // A bare `config init` writes to the working directory, not the
    // per-user location, so the file is easy to find and edit.
    let path = config_path.unwrap_or_else(|| PathBuf::from("revdash.toml"));

    if path.exists() && !force {
        eprintln!(
            "{} {} already exists. Use '{}' to overwrite.",
            "⚠".yellow(),
            path.display(),
            "--force".cyan()
        );
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let sample = Config::sample().to_toml()?;
    fs::write(&path, sample).with_context(|| format!("failed to write {}", path.display()))?;

    println!(
        "{} Created {}. Point each [[datasets]] entry at a review CSV.",
        "✓".green(),
        path.display().to_string().cyan()
    );

    Ok(())
}

fn validate_config(config_path: Option<PathBuf>) -> Result<()> {
    let path = super::resolve_config_path(config_path);

    if !path.exists() {
        eprintln!(
            "{} Configuration not found at {}",
            "✗".red(),
            path.display()
        );
        return Ok(());
    }

    match Config::load(&path) {
        Ok(config) => {
            println!("{} Configuration is valid", "✓".green());
            for dataset in &config.datasets {
                if dataset.path.exists() {
                    println!("{} {} -> {}", "✓".green(), dataset.id, dataset.path.display());
                } else {
                    println!(
                        "{} {} -> {} (file not found)",
                        "⚠".yellow(),
                        dataset.id,
                        dataset.path.display()
                    );
                }
            }
        }
        Err(e) => eprintln!("{} {}", "✗".red(), e),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_sample_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("revdash.toml");

        init_config(false, Some(path.clone())).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.datasets.len(), 3);
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("revdash.toml");
        fs::write(&path, "datasets = []").unwrap();

        init_config(false, Some(path.clone())).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "datasets = []");

        init_config(true, Some(path.clone())).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[[datasets]]"));
    }
}
