//! JSON exporter for analysis reports

use super::exporter::Exporter;
use super::report::AnalysisReport;
use crate::error::Result;

/// JSON exporter
pub struct JsonExporter {
    /// Pretty-print the output
    pretty: bool,
}

impl JsonExporter {
    /// Create a new JSON exporter (pretty-printed)
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Set whether to pretty-print
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for JsonExporter {
    fn export(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn format_name(&self) -> &str {
        "json"
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
