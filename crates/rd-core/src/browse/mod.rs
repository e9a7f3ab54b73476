//! Paginated browsing of filtered example reviews

mod filter;
mod session;

pub use filter::{filter_reviews, NumberedReview};
pub use session::{BrowseSession, PageView, DEFAULT_PAGE_SIZE};
