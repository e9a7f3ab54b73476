//! Error types for revdash

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for revdash
#[derive(Debug, Error)]
pub enum RevdashError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No encoding in the fallback list decoded the file cleanly
    #[error("Unable to decode {path} with any of the configured encodings: {tried}")]
    Encoding { path: PathBuf, tried: String },

    /// Encoding label not recognized
    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),

    /// CSV structure error
    #[error("CSV error in {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// Required column missing from a dataset file
    #[error("Column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Rating cell that could not be parsed as a number
    #[error("Invalid rating '{value}' at record {record} of {path}")]
    InvalidRating {
        value: String,
        record: usize,
        path: PathBuf,
    },

    /// Dataset loaded with zero reviews
    #[error("Dataset for brand '{0}' contains no reviews")]
    EmptyDataset(String),

    /// Brand not found
    #[error("Brand not found: {0}")]
    BrandNotFound(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<RevdashError>,
    },
}

impl RevdashError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        RevdashError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for revdash
pub type Result<T> = std::result::Result<T, RevdashError>;
