//! Review and dataset model

use crate::types::Brand;
use serde::{Deserialize, Serialize};

/// A single customer review
///
/// Immutable once loaded. The rating is always present and numeric
/// (loader precondition); the text may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Raw rating, possibly fractional
    pub rating: f64,
    /// Review text, `None` when the cell was empty
    pub text: Option<String>,
}

impl Review {
    /// Create a new review
    pub fn new(rating: f64, text: Option<String>) -> Self {
        Self { rating, text }
    }

    /// Substring match against the review text
    ///
    /// Missing text never matches.
    pub fn text_contains(&self, needle: &str) -> bool {
        self.text.as_deref().is_some_and(|t| t.contains(needle))
    }
}

/// An ordered, read-only collection of reviews for one brand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandDataset {
    /// The brand the reviews belong to
    pub brand: Brand,
    /// Reviews in file order
    pub reviews: Vec<Review>,
}

impl BrandDataset {
    /// Create a new dataset
    pub fn new(brand: Brand, reviews: Vec<Review>) -> Self {
        Self { brand, reviews }
    }

    /// Number of reviews
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Whether the dataset has no reviews
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Arithmetic mean of the raw ratings
    ///
    /// Returns 0.0 for an empty dataset; loaders reject empty datasets
    /// so this only matters for tests.
    pub fn mean_rating(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.reviews.iter().map(|r| r.rating).sum();
        sum / self.reviews.len() as f64
    }
}
