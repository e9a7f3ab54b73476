//! Report data assembly

use crate::config::AnalysisConfig;
use crate::keywords::{top3_summary, KeywordEntry, KeywordRanker};
use crate::review::BrandDataset;
use crate::stats::{BrandSummary, RatingDistribution};
use crate::tokenize::Tokenizer;
use crate::types::Brand;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Condensed top-3 keyword row for one rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Top3Row {
    /// Rating bucket
    pub rating: u8,
    /// `"kw1(c1) / kw2(c2) / kw3(c3)"` display string
    pub keywords: String,
}

/// Full analysis for one brand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandReport {
    /// The brand
    pub brand: Brand,
    /// Review count and mean rating
    pub summary: BrandSummary,
    /// Rating distribution over all five buckets
    pub distribution: RatingDistribution,
    /// Ranked keyword table (rating ascending)
    pub keywords: Vec<KeywordEntry>,
    /// Condensed top-3 strings per rating
    pub top3: Vec<Top3Row>,
}

/// The complete dashboard dataset, ready for rendering or export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// When the report was computed
    pub generated_at: DateTime<Utc>,
    /// One report per brand, in configuration order
    pub brands: Vec<BrandReport>,
}

impl AnalysisReport {
    /// Compute the full report over all brand datasets
    pub fn build(datasets: &[BrandDataset], analysis: &AnalysisConfig) -> Self {
        let tokenizer =
            Tokenizer::new().with_extra_stopwords(analysis.extra_stopwords.iter().cloned());
        let ranker = KeywordRanker::new(tokenizer, analysis.top_n);

        let brands = datasets
            .iter()
            .map(|dataset| {
                let keywords = ranker.rank(dataset);
                let top3 = top3_summary(&keywords)
                    .into_iter()
                    .map(|(rating, keywords)| Top3Row { rating, keywords })
                    .collect();
                BrandReport {
                    brand: dataset.brand.clone(),
                    summary: BrandSummary::of(dataset),
                    distribution: RatingDistribution::compute(dataset),
                    keywords,
                    top3,
                }
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            brands,
        }
    }
}
