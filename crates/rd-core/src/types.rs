//! Core type definitions for revdash

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable machine identifier for a brand dataset
///
/// Used as part of pagination keys, so it must stay stable across
/// interactions within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrandId(pub String);

impl BrandId {
    /// Create a BrandId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        BrandId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BrandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A brand whose reviews are compared on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Stable machine key
    pub id: BrandId,
    /// Display name
    pub label: String,
}

impl Brand {
    /// Create a new brand
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: BrandId::from_string(id),
            label: label.into(),
        }
    }
}

/// Direction for page navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    /// Previous page
    Prev,
    /// Next page
    Next,
}

/// Composite key identifying one filtered review view
///
/// Pagination cursors are tracked per key: switching brand, rating or
/// keyword addresses an independent cursor, and a fresh key starts at
/// page 0 without resetting the others.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterKey {
    /// Brand the filter applies to
    pub brand: BrandId,
    /// Rounded rating bucket (1..=5)
    pub rating: u8,
    /// Selected keyword (substring-matched against review text)
    pub keyword: String,
}

impl FilterKey {
    /// Create a new filter key
    pub fn new(brand: BrandId, rating: u8, keyword: impl Into<String>) -> Self {
        Self {
            brand,
            rating,
            keyword: keyword.into(),
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.brand, self.rating, self.keyword)
    }
}
