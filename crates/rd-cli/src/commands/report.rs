//! Report command
//!
//! Export the full analysis report as markdown or JSON.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use rd_core::export::{create_exporter, AnalysisReport};
use std::fs;
use std::path::PathBuf;

/// Arguments for the report command
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Output format (markdown, json)
    #[arg(short, long, default_value = "markdown")]
    pub format: String,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the report command
pub fn execute(args: ReportArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let datasets = super::load_datasets(&config)?;

    let Some(exporter) = create_exporter(&args.format) else {
        bail!(
            "unknown format '{}' (available: markdown, json)",
            args.format
        );
    };

    let report = AnalysisReport::build(&datasets, &config.analysis);
    let rendered = exporter.export(&report)?;

    match args.output {
        Some(path) => {
            fs::write(&path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "{} Exported {} report to {}",
                "✓".green(),
                exporter.format_name(),
                path.display().to_string().cyan()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
