//! Keywords command
//!
//! Print the ranked keyword tables per rating for each brand.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use rd_core::keywords::{keywords_for_rating, ratings_present, top3_summary, KeywordRanker};
use rd_core::review::BrandDataset;
use rd_core::tokenize::Tokenizer;
use rd_core::RevdashError;
use std::path::PathBuf;

/// Arguments for the keywords command
#[derive(Debug, Args)]
pub struct KeywordsArgs {
    /// Only show this brand (by id)
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Only show the condensed top-3 lines
    #[arg(long)]
    pub top3: bool,
}

/// Execute the keywords command
pub fn execute(args: KeywordsArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let datasets = super::load_datasets(&config)?;

    let selected: Vec<&BrandDataset> = match args.brand.as_deref() {
        Some(id) => {
            let dataset = datasets
                .iter()
                .find(|d| d.brand.id.as_str() == id)
                .ok_or_else(|| RevdashError::BrandNotFound(id.to_string()))?;
            vec![dataset]
        }
        None => datasets.iter().collect(),
    };

    let tokenizer =
        Tokenizer::new().with_extra_stopwords(config.analysis.extra_stopwords.iter().cloned());
    let ranker = KeywordRanker::new(tokenizer, config.analysis.top_n);

    for (i, dataset) in selected.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_brand_keywords(dataset, &ranker, args.top3);
    }

    Ok(())
}

fn print_brand_keywords(dataset: &BrandDataset, ranker: &KeywordRanker, top3_only: bool) {
    let keywords = ranker.rank(dataset);

    println!("{}", dataset.brand.label.bold().underline());

    if keywords.is_empty() {
        println!("  {}", "no keywords".dimmed());
        return;
    }

    if top3_only {
        for (rating, row) in top3_summary(&keywords) {
            println!("  {}★  {}", rating, row);
        }
        return;
    }

    for rating in ratings_present(&keywords) {
        println!("  {}★", rating);
        for entry in keywords_for_rating(&keywords, rating) {
            println!("    {} {}", entry.keyword.cyan(), format!("({})", entry.count).dimmed());
        }
    }
}
