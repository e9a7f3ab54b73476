//! Review filtering for the example browser

use crate::review::BrandDataset;
use crate::stats::rating_bucket;
use serde::{Deserialize, Serialize};

/// A review text annotated with its absolute position in the filtered subset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedReview {
    /// 1-based position within the whole filtered subset, for display
    /// numbering like "(12) review text..."
    pub position: usize,
    /// The review text
    pub text: String,
}

/// Select the reviews matching a rating bucket and a keyword substring
///
/// The keyword is matched as a plain substring of the review text;
/// reviews with missing text never match. Positions are assigned in
/// dataset order, starting at 1.
pub fn filter_reviews(dataset: &BrandDataset, rating: u8, keyword: &str) -> Vec<NumberedReview> {
    dataset
        .reviews
        .iter()
        .filter(|r| rating_bucket(r.rating) == rating && r.text_contains(keyword))
        .enumerate()
        .map(|(i, r)| NumberedReview {
            position: i + 1,
            // text_contains already guaranteed Some
            text: r.text.clone().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::Review;
    use crate::types::Brand;
    use pretty_assertions::assert_eq;

    fn dataset(reviews: Vec<(f64, Option<&str>)>) -> BrandDataset {
        BrandDataset::new(
            Brand::new("brand-a", "Brand A"),
            reviews
                .into_iter()
                .map(|(rating, text)| Review::new(rating, text.map(str::to_string)))
                .collect(),
        )
    }

    #[test]
    fn test_filter_scenario() {
        // "편하" over ["정말 편하고 좋아요", "불편해요", None] matches only the first
        let ds = dataset(vec![
            (5.0, Some("정말 편하고 좋아요")),
            (5.0, Some("불편해요")),
            (5.0, None),
        ]);
        let hits = filter_reviews(&ds, 5, "편하");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].position, 1);
        assert_eq!(hits[0].text, "정말 편하고 좋아요");
    }

    #[test]
    fn test_filter_respects_rating_bucket() {
        let ds = dataset(vec![
            (5.0, Some("편해요")),
            (4.6, Some("편해요")),
            (4.0, Some("편해요")),
        ]);
        // 4.6 rounds into bucket 5
        assert_eq!(filter_reviews(&ds, 5, "편해").len(), 2);
        assert_eq!(filter_reviews(&ds, 4, "편해").len(), 1);
    }

    #[test]
    fn test_positions_are_one_based_and_contiguous() {
        let ds = dataset(vec![
            (3.0, Some("무게 무거움")),
            (3.0, Some("가벼움")),
            (3.0, Some("무게 적당")),
        ]);
        let hits = filter_reviews(&ds, 3, "무게");
        let positions: Vec<usize> = hits.iter().map(|h| h.position).collect();
        assert_eq!(positions, vec![1, 2]);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let ds = dataset(vec![(5.0, Some("좋아요"))]);
        assert!(filter_reviews(&ds, 5, "없는키워드").is_empty());
        assert!(filter_reviews(&ds, 2, "좋아요").is_empty());
    }
}
