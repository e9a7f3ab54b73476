//! Exporter trait and factory

use super::report::AnalysisReport;
use super::{JsonExporter, MarkdownExporter};
use crate::error::Result;

/// Renders an [`AnalysisReport`] into a text format
pub trait Exporter {
    /// Produce the report in this exporter's format
    fn export(&self, report: &AnalysisReport) -> Result<String>;

    /// Format name used on the CLI (`--format`)
    fn format_name(&self) -> &str;

    /// File extension for exported files
    fn file_extension(&self) -> &str;
}

/// Create an exporter by format name
pub fn create_exporter(format: &str) -> Option<Box<dyn Exporter>> {
    match format {
        "markdown" | "md" => Some(Box::new(MarkdownExporter::new())),
        "json" => Some(Box::new(JsonExporter::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_exporter_known_formats() {
        assert_eq!(create_exporter("markdown").unwrap().format_name(), "markdown");
        assert_eq!(create_exporter("md").unwrap().format_name(), "markdown");
        assert_eq!(create_exporter("json").unwrap().format_name(), "json");
    }

    #[test]
    fn test_create_exporter_unknown_format() {
        assert!(create_exporter("xml").is_none());
    }
}
