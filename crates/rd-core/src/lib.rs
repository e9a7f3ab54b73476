//! rd-core - Core library for revdash
//!
//! This crate provides the analytics pipeline for the Review Analytics
//! Dashboard: keyword tokenization, rating distribution statistics,
//! per-rating keyword ranking, paginated review browsing, and report export.

pub mod browse;
pub mod config;
pub mod error;
pub mod export;
pub mod keywords;
pub mod review;
pub mod stats;
pub mod tokenize;
pub mod types;

pub use error::{Result, RevdashError};
pub use types::*;
