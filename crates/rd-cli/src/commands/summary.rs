//! Summary command
//!
//! Print the brand comparison and per-brand rating distributions.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use rd_core::review::BrandDataset;
use rd_core::stats::{BrandSummary, RatingDistribution};
use std::path::PathBuf;

/// Width of the distribution bar, in characters
const BAR_WIDTH: usize = 20;

/// Arguments for the summary command
#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Skip the per-brand rating distributions
    #[arg(long)]
    pub no_distribution: bool,
}

/// Execute the summary command
pub fn execute(args: SummaryArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let datasets = super::load_datasets(&config)?;

    println!("{}", "Brand Summary".bold().underline());
    println!();
    println!(
        "  {:<20} {:>8} {:>12}",
        "brand".dimmed(),
        "reviews".dimmed(),
        "mean rating".dimmed()
    );
    for dataset in &datasets {
        let summary = BrandSummary::of(dataset);
        // Pad before coloring so escape codes do not skew the columns
        let label = format!("{:<20}", summary.label);
        println!(
            "  {} {:>8} {:>12.2}",
            label.cyan(),
            summary.review_count,
            summary.mean_rating
        );
    }

    if !args.no_distribution {
        for dataset in &datasets {
            println!();
            print_distribution(dataset);
        }
    }

    Ok(())
}

fn print_distribution(dataset: &BrandDataset) {
    let distribution = RatingDistribution::compute(dataset);
    let max_count = distribution.max_count().max(1);

    println!("{}", dataset.brand.label.bold());
    for bucket in distribution.buckets() {
        let filled = bucket.count * BAR_WIDTH / max_count;
        let bar = format!("{:<width$}", "█".repeat(filled), width = BAR_WIDTH);
        println!(
            "  {}★ {} {:>5}  {:>5.1}%",
            bucket.rating,
            bar.yellow(),
            bucket.count,
            bucket.percentage,
        );
    }
}
