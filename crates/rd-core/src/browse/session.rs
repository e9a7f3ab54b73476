//! Session-scoped pagination state

use crate::browse::filter::NumberedReview;
use crate::types::{FilterKey, PageDirection};
use std::collections::HashMap;
use tracing::debug;

/// Default number of reviews per page
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One visible page of a filtered review subset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// The visible slice, absolute-numbered
    pub entries: Vec<NumberedReview>,
    /// Zero-based page index
    pub page: usize,
    /// Last valid page index (0 when the subset is empty)
    pub max_page: usize,
    /// Size of the whole filtered subset
    pub total: usize,
    /// Whether navigating backwards is possible
    pub has_prev: bool,
    /// Whether navigating forwards is possible
    pub has_next: bool,
}

impl PageView {
    /// Whether the filtered subset had no reviews at all
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// "page X of Y" status caption (1-based for display)
    pub fn caption(&self) -> String {
        if self.is_empty() {
            "no matching reviews".to_string()
        } else {
            format!("page {} of {}", self.page + 1, self.max_page + 1)
        }
    }

    /// "showing a-b of N" caption for the visible range
    pub fn range_caption(&self) -> String {
        if self.is_empty() {
            "no matching reviews".to_string()
        } else {
            let first = self.entries.first().map(|e| e.position).unwrap_or(0);
            let last = self.entries.last().map(|e| e.position).unwrap_or(0);
            format!("showing {}-{} of {}", first, last, self.total)
        }
    }
}

/// Session-scoped map from filter key to page cursor
///
/// Cursors are created lazily on first access and live for the whole
/// interactive session. Switching any component of the key addresses a
/// distinct cursor; the previous one is retained.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    pages: HashMap<FilterKey, usize>,
    page_size: usize,
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl BrowseSession {
    /// Create a session with the given page size
    ///
    /// A page size of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            pages: HashMap::new(),
            page_size: page_size.max(1),
        }
    }

    /// Page size in use
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current zero-based page for a key (0 on first access)
    pub fn page(&self, key: &FilterKey) -> usize {
        self.pages.get(key).copied().unwrap_or(0)
    }

    /// Last valid page index for a subset of the given size
    fn max_page(&self, total: usize) -> usize {
        if total == 0 {
            0
        } else {
            total.div_ceil(self.page_size) - 1
        }
    }

    /// Move the cursor for a key, clamped to `[0, max_page]`
    ///
    /// Moves past an edge are no-ops, signalled through the next
    /// [`PageView`]'s `has_prev`/`has_next` flags rather than an error.
    /// Returns the page index after the move.
    pub fn advance(&mut self, key: &FilterKey, direction: PageDirection, total: usize) -> usize {
        let max_page = self.max_page(total);
        let current = self.page(key).min(max_page);
        let next = match direction {
            PageDirection::Prev => current.saturating_sub(1),
            PageDirection::Next => (current + 1).min(max_page),
        };
        debug!(key = %key, from = current, to = next, "page advance");
        self.pages.insert(key.clone(), next);
        next
    }

    /// Build the visible page for a key over a filtered subset
    pub fn page_view(&self, key: &FilterKey, filtered: &[NumberedReview]) -> PageView {
        let total = filtered.len();
        let max_page = self.max_page(total);
        // A cursor can point past the end if it was saved against a
        // larger subset; clamp instead of resetting.
        let page = self.page(key).min(max_page);

        let start = page * self.page_size;
        let end = (start + self.page_size).min(total);
        let entries = if total == 0 {
            Vec::new()
        } else {
            filtered[start..end].to_vec()
        };

        PageView {
            entries,
            page,
            max_page,
            total,
            has_prev: total > 0 && page > 0,
            has_next: total > 0 && page < max_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BrandId;
    use pretty_assertions::assert_eq;

    fn key(keyword: &str) -> FilterKey {
        FilterKey::new(BrandId::from_string("brand-a"), 5, keyword)
    }

    fn subset(total: usize) -> Vec<NumberedReview> {
        (1..=total)
            .map(|position| NumberedReview {
                position,
                text: format!("review {position}"),
            })
            .collect()
    }

    #[test]
    fn test_first_access_is_page_zero() {
        let session = BrowseSession::default();
        assert_eq!(session.page(&key("편하")), 0);
    }

    #[test]
    fn test_twelve_reviews_three_pages() {
        let mut session = BrowseSession::new(5);
        let k = key("편하");
        let filtered = subset(12);

        let view = session.page_view(&k, &filtered);
        assert_eq!(view.max_page, 2);
        let positions: Vec<usize> = view.entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5]);
        assert!(!view.has_prev);
        assert!(view.has_next);

        session.advance(&k, PageDirection::Next, filtered.len());
        let view = session.page_view(&k, &filtered);
        let positions: Vec<usize> = view.entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![6, 7, 8, 9, 10]);

        session.advance(&k, PageDirection::Next, filtered.len());
        let view = session.page_view(&k, &filtered);
        let positions: Vec<usize> = view.entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![11, 12]);
        assert!(view.has_prev);
        assert!(!view.has_next);

        // Advancing past the last page is a no-op
        let page = session.advance(&k, PageDirection::Next, filtered.len());
        assert_eq!(page, 2);
    }

    #[test]
    fn test_prev_at_page_zero_is_noop() {
        let mut session = BrowseSession::new(5);
        let k = key("편하");
        let page = session.advance(&k, PageDirection::Prev, 12);
        assert_eq!(page, 0);
    }

    #[test]
    fn test_empty_subset_disables_both_directions() {
        let session = BrowseSession::new(5);
        let view = session.page_view(&key("없음"), &[]);
        assert!(view.is_empty());
        assert!(view.entries.is_empty());
        assert!(!view.has_prev);
        assert!(!view.has_next);
        assert_eq!(view.caption(), "no matching reviews");
    }

    #[test]
    fn test_cursors_are_independent_per_key() {
        let mut session = BrowseSession::new(5);
        let a = key("편하");
        let b = key("배송");

        session.advance(&a, PageDirection::Next, 12);
        assert_eq!(session.page(&a), 1);
        // A fresh key starts at page 0, and advancing it leaves `a` alone
        assert_eq!(session.page(&b), 0);
        session.advance(&b, PageDirection::Next, 12);
        assert_eq!(session.page(&a), 1);
        assert_eq!(session.page(&b), 1);
    }

    #[test]
    fn test_stale_cursor_clamped_to_smaller_subset() {
        let mut session = BrowseSession::new(5);
        let k = key("편하");
        session.advance(&k, PageDirection::Next, 12);
        session.advance(&k, PageDirection::Next, 12);
        assert_eq!(session.page(&k), 2);

        let view = session.page_view(&k, &subset(6));
        assert_eq!(view.page, 1);
        assert_eq!(view.max_page, 1);
    }

    #[test]
    fn test_captions() {
        let mut session = BrowseSession::new(5);
        let k = key("편하");
        let filtered = subset(12);
        session.advance(&k, PageDirection::Next, filtered.len());
        session.advance(&k, PageDirection::Next, filtered.len());

        let view = session.page_view(&k, &filtered);
        assert_eq!(view.caption(), "page 3 of 3");
        assert_eq!(view.range_caption(), "showing 11-12 of 12");
    }

    #[test]
    fn test_exact_page_boundary() {
        let session = BrowseSession::new(5);
        let view = session.page_view(&key("편하"), &subset(10));
        assert_eq!(view.max_page, 1);
    }
}
