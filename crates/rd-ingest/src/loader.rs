//! CSV dataset loading

use crate::encoding::decode_with_fallback;
use csv::{ReaderBuilder, Trim};
use rd_core::config::{Config, IngestConfig};
use rd_core::review::{BrandDataset, Review};
use rd_core::types::Brand;
use rd_core::{Result, RevdashError};
use std::path::Path;
use tracing::info;

/// Loads one brand dataset from a CSV file
///
/// The rating column must hold a numeric value in every record; the text
/// column may be empty, which becomes a missing text rather than an error.
pub struct CsvLoader {
    rating_column: String,
    text_column: String,
    encodings: Vec<String>,
}

impl CsvLoader {
    /// Create a loader from the ingestion configuration
    pub fn new(ingest: &IngestConfig) -> Self {
        Self {
            rating_column: ingest.rating_column.clone(),
            text_column: ingest.text_column.clone(),
            encodings: ingest.encodings.clone(),
        }
    }

    /// Load the dataset for one brand
    ///
    /// Fails if the file cannot be read or decoded, if a required column
    /// is missing, if any rating cell is non-numeric, or if the file
    /// holds no reviews at all.
    pub fn load(&self, brand: Brand, path: &Path) -> Result<BrandDataset> {
        let bytes = std::fs::read(path)?;
        let content = decode_with_fallback(&bytes, &self.encodings, path)?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| RevdashError::Csv {
                path: path.to_path_buf(),
                message: format!("failed to read headers: {e}"),
            })?
            .clone();

        let rating_idx = self.column_index(&headers, &self.rating_column, path)?;
        let text_idx = self.column_index(&headers, &self.text_column, path)?;

        let mut reviews = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let record = result.map_err(|e| RevdashError::Csv {
                path: path.to_path_buf(),
                message: format!("record {}: {e}", i + 1),
            })?;

            let raw_rating = record.get(rating_idx).unwrap_or("");
            let rating: f64 =
                raw_rating
                    .parse()
                    .map_err(|_| RevdashError::InvalidRating {
                        value: raw_rating.to_string(),
                        record: i + 1,
                        path: path.to_path_buf(),
                    })?;

            let text = record
                .get(text_idx)
                .filter(|t| !t.is_empty())
                .map(str::to_string);

            reviews.push(Review::new(rating, text));
        }

        if reviews.is_empty() {
            return Err(RevdashError::EmptyDataset(brand.id.to_string()));
        }

        info!(
            brand = %brand.id,
            reviews = reviews.len(),
            path = %path.display(),
            "loaded dataset"
        );
        Ok(BrandDataset::new(brand, reviews))
    }

    fn column_index(
        &self,
        headers: &csv::StringRecord,
        column: &str,
        path: &Path,
    ) -> Result<usize> {
        headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| RevdashError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            })
    }
}

/// Load every configured brand dataset, failing fast on the first bad file
pub fn load_all(config: &Config) -> Result<Vec<BrandDataset>> {
    let loader = CsvLoader::new(&config.ingest);
    config
        .datasets
        .iter()
        .map(|dataset| {
            loader.load(
                Brand::new(dataset.id.clone(), dataset.label.clone()),
                &dataset.path,
            )
        })
        .collect()
}
