//! rd-ingest - Dataset ingestion for revdash
//!
//! Loads per-brand review CSV files whose text encoding is not known
//! ahead of time: an ordered list of candidate encodings is tried until
//! one decodes cleanly.

pub mod encoding;
pub mod loader;

pub use encoding::decode_with_fallback;
pub use loader::{load_all, CsvLoader};
