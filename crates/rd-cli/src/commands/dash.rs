//! Dash command
//!
//! Launch the interactive terminal dashboard.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the dash command
#[derive(Debug, Args)]
pub struct DashArgs {}

/// Execute the dash command
pub fn execute(_args: DashArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let datasets = super::load_datasets(&config)?;

    tracing::info!(brands = datasets.len(), "starting dashboard");

    let mut app = rd_ui::App::new(datasets, &config.analysis, &config.browse)?;
    app.run()
}
