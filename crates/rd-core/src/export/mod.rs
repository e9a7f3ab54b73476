//! Analysis report export

mod exporter;
mod json;
mod markdown;
mod report;

pub use exporter::{create_exporter, Exporter};
pub use json::JsonExporter;
pub use markdown::MarkdownExporter;
pub use report::{AnalysisReport, BrandReport, Top3Row};
