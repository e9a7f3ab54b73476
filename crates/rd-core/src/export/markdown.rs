//! Markdown exporter for analysis reports

use super::exporter::Exporter;
use super::report::{AnalysisReport, BrandReport};
use crate::error::Result;

/// Markdown exporter
pub struct MarkdownExporter {
    /// Include per-brand rating distribution tables
    include_distributions: bool,
    /// Include per-brand keyword tables
    include_keywords: bool,
}

impl MarkdownExporter {
    /// Create a new Markdown exporter with default settings
    pub fn new() -> Self {
        Self {
            include_distributions: true,
            include_keywords: true,
        }
    }

    /// Set whether to include distribution tables
    pub fn with_distributions(mut self, include: bool) -> Self {
        self.include_distributions = include;
        self
    }

    /// Set whether to include keyword tables
    pub fn with_keywords(mut self, include: bool) -> Self {
        self.include_keywords = include;
        self
    }

    /// Render the report header
    fn render_header(&self, report: &AnalysisReport) -> String {
        let mut header = String::new();
        header.push_str("# Review Analytics Report\n\n");
        header.push_str(&format!(
            "**Generated:** {}\n\n",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        header
    }

    /// Render the brand comparison summary table
    fn render_summary(&self, report: &AnalysisReport) -> String {
        let mut out = String::new();
        out.push_str("## Brand Summary\n\n");
        out.push_str("| Brand | Reviews | Mean Rating |\n");
        out.push_str("|-------|--------:|------------:|\n");
        for brand in &report.brands {
            out.push_str(&format!(
                "| {} | {} | {:.2} |\n",
                brand.summary.label, brand.summary.review_count, brand.summary.mean_rating
            ));
        }
        out.push('\n');
        out
    }

    /// Render one brand's section
    fn render_brand(&self, brand: &BrandReport) -> String {
        let mut out = String::new();
        out.push_str(&format!("## {}\n\n", brand.brand.label));

        if self.include_distributions {
            out.push_str("### Rating Distribution\n\n");
            out.push_str("| Rating | Count | Share |\n");
            out.push_str("|-------:|------:|------:|\n");
            for bucket in brand.distribution.buckets() {
                out.push_str(&format!(
                    "| {} | {} | {:.1}% |\n",
                    bucket.rating, bucket.count, bucket.percentage
                ));
            }
            out.push('\n');
        }

        if self.include_keywords {
            out.push_str("### Top Keywords per Rating\n\n");
            out.push_str("| Rating | Keywords |\n");
            out.push_str("|-------:|----------|\n");
            for row in &brand.top3 {
                out.push_str(&format!("| {} | {} |\n", row.rating, row.keywords));
            }
            out.push('\n');
        }

        out
    }
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for MarkdownExporter {
    fn export(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.render_header(report));
        output.push_str(&self.render_summary(report));
        for brand in &report.brands {
            output.push_str(&self.render_brand(brand));
        }

        Ok(output)
    }

    fn format_name(&self) -> &str {
        "markdown"
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}
