//! Configuration management for revdash

use crate::browse::DEFAULT_PAGE_SIZE;
use crate::error::{Result, RevdashError};
use crate::keywords::DEFAULT_TOP_N;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Brand dataset files to load
    pub datasets: Vec<DatasetConfig>,
    /// Ingestion settings
    pub ingest: IngestConfig,
    /// Analysis settings
    pub analysis: AnalysisConfig,
    /// Review browser settings
    pub browse: BrowseConfig,
    /// UI settings
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            datasets: Vec::new(),
            ingest: IngestConfig::default(),
            analysis: AnalysisConfig::default(),
            browse: BrowseConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// One brand dataset file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Stable machine key (used in pagination state)
    pub id: String,
    /// Display name
    pub label: String,
    /// Path to the CSV file
    pub path: PathBuf,
}

/// Ingestion-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Name of the numeric rating column
    pub rating_column: String,
    /// Name of the review text column
    pub text_column: String,
    /// Encoding labels tried in order until one decodes cleanly
    pub encodings: Vec<String>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            rating_column: "rating".to_string(),
            text_column: "review_text".to_string(),
            encodings: vec![
                "euc-kr".to_string(),
                "utf-8-sig".to_string(),
                "utf-8".to_string(),
            ],
        }
    }
}

/// Analysis-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Keywords kept per rating bucket
    pub top_n: usize,
    /// Stopwords added on top of the built-in set
    pub extra_stopwords: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            extra_stopwords: Vec::new(),
        }
    }
}

/// Review-browser configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Reviews shown per page
    pub page_size: usize,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// UI-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| RevdashError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML (used by `revdash config init`)
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| RevdashError::Toml(e.to_string()))
    }

    /// Check invariants the rest of the system relies on
    pub fn validate(&self) -> Result<()> {
        if self.datasets.is_empty() {
            return Err(RevdashError::Config(
                "no [[datasets]] entries configured".to_string(),
            ));
        }
        if self.ingest.encodings.is_empty() {
            return Err(RevdashError::Config(
                "ingest.encodings must list at least one encoding".to_string(),
            ));
        }
        if self.analysis.top_n == 0 {
            return Err(RevdashError::Config(
                "analysis.top_n must be at least 1".to_string(),
            ));
        }
        if self.browse.page_size == 0 {
            return Err(RevdashError::Config(
                "browse.page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Default config file location (`<config dir>/revdash/revdash.toml`,
    /// falling back to the working directory)
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "revdash", "revdash")
            .map(|dirs| dirs.config_dir().join("revdash.toml"))
            .unwrap_or_else(|| PathBuf::from("revdash.toml"))
    }

    /// A starter configuration with three example brands
    pub fn sample() -> Self {
        Self {
            datasets: vec![
                DatasetConfig {
                    id: "brand-a".to_string(),
                    label: "Brand A".to_string(),
                    path: PathBuf::from("data/brand_a_reviews.csv"),
                },
                DatasetConfig {
                    id: "brand-b".to_string(),
                    label: "Brand B".to_string(),
                    path: PathBuf::from("data/brand_b_reviews.csv"),
                },
                DatasetConfig {
                    id: "brand-c".to_string(),
                    label: "Brand C".to_string(),
                    path: PathBuf::from("data/brand_c_reviews.csv"),
                },
            ],
            ..Self::default()
        }
    }
}
