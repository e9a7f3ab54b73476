//! rd-ui - Terminal dashboard for revdash
//!
//! Renders the brand comparison as a ratatui application: one tab per
//! brand, a rating distribution table, the keyword ranking for a selected
//! rating, and a paginated browser for example reviews matching the
//! selected keyword.

pub mod app;
pub mod render;
pub mod theme;

pub use app::{App, AppMode, AppState};
