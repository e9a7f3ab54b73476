//! Per-rating keyword ranking

use crate::review::BrandDataset;
use crate::stats::rating_bucket;
use crate::tokenize::Tokenizer;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Default number of keywords kept per rating bucket
pub const DEFAULT_TOP_N: usize = 3;

/// One ranked keyword row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    /// Rounded rating bucket the keyword was counted in
    pub rating: u8,
    /// The keyword token
    pub keyword: String,
    /// Occurrence count within the bucket
    pub count: usize,
}

/// Token counter that preserves first-insertion order
///
/// Ties in the final ranking are broken by the order tokens were first
/// seen in the concatenated token stream, so the counting structure has
/// to remember insertion order (a plain HashMap would not).
#[derive(Debug, Default)]
struct OrderedCounter {
    index: HashMap<String, usize>,
    items: Vec<(String, usize)>,
}

impl OrderedCounter {
    fn add(&mut self, token: String) {
        match self.index.get(&token) {
            Some(&i) => self.items[i].1 += 1,
            None => {
                self.index.insert(token.clone(), self.items.len());
                self.items.push((token, 1));
            }
        }
    }

    /// Items by descending count; equal counts keep insertion order
    fn into_ranked(mut self) -> Vec<(String, usize)> {
        // Vec::sort_by is stable, so insertion order survives ties
        self.items.sort_by(|a, b| b.1.cmp(&a.1));
        self.items
    }
}

/// Ranks keywords per rating bucket for one brand dataset
#[derive(Debug, Clone)]
pub struct KeywordRanker {
    tokenizer: Tokenizer,
    top_n: usize,
}

impl Default for KeywordRanker {
    fn default() -> Self {
        Self::new(Tokenizer::new(), DEFAULT_TOP_N)
    }
}

impl KeywordRanker {
    /// Create a ranker with the given tokenizer and top-N cap
    pub fn new(tokenizer: Tokenizer, top_n: usize) -> Self {
        Self { tokenizer, top_n }
    }

    /// The tokenizer in use
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Rank the top-N keywords for every rating bucket present in the dataset
    ///
    /// Only buckets with at least one review appear; entries are ordered
    /// by rating ascending, then by descending count with first-occurrence
    /// tie-break.
    pub fn rank(&self, dataset: &BrandDataset) -> Vec<KeywordEntry> {
        // BTreeMap keeps the distinct ratings sorted ascending
        let mut groups: BTreeMap<u8, OrderedCounter> = BTreeMap::new();

        for review in &dataset.reviews {
            let bucket = rating_bucket(review.rating);
            let counter = groups.entry(bucket).or_default();
            for token in self.tokenizer.tokenize(review.text.as_deref()) {
                counter.add(token);
            }
        }

        let mut entries = Vec::new();
        for (rating, counter) in groups {
            for (keyword, count) in counter.into_ranked().into_iter().take(self.top_n) {
                entries.push(KeywordEntry {
                    rating,
                    keyword,
                    count,
                });
            }
        }
        entries
    }
}

/// Distinct ratings present in a keyword table, ascending
pub fn ratings_present(entries: &[KeywordEntry]) -> Vec<u8> {
    let mut ratings: Vec<u8> = entries.iter().map(|e| e.rating).collect();
    ratings.dedup();
    ratings
}

/// Keywords for one rating bucket, in ranked order
pub fn keywords_for_rating<'a>(entries: &'a [KeywordEntry], rating: u8) -> Vec<&'a KeywordEntry> {
    entries.iter().filter(|e| e.rating == rating).collect()
}

/// Condensed top-3 summary: per rating ascending, the three highest-count
/// keywords formatted as `"kw1(c1) / kw2(c2) / kw3(c3)"`
///
/// Pure projection over the ranked table; no side effects.
pub fn top3_summary(entries: &[KeywordEntry]) -> Vec<(u8, String)> {
    ratings_present(entries)
        .into_iter()
        .map(|rating| {
            let row = keywords_for_rating(entries, rating)
                .into_iter()
                .take(3)
                .map(|e| format!("{}({})", e.keyword, e.count))
                .collect::<Vec<_>>()
                .join(" / ");
            (rating, row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::Review;
    use crate::types::Brand;
    use pretty_assertions::assert_eq;

    fn dataset(reviews: Vec<(f64, &str)>) -> BrandDataset {
        BrandDataset::new(
            Brand::new("brand-a", "Brand A"),
            reviews
                .into_iter()
                .map(|(rating, text)| Review::new(rating, Some(text.to_string())))
                .collect(),
        )
    }

    #[test]
    fn test_rank_counts_within_bucket() {
        let ds = dataset(vec![
            (5.0, "배송이 빨라요 안장도 편해요"),
            (5.0, "안장이 편해요 편해요"),
            (1.0, "불편해요"),
        ]);
        let ranker = KeywordRanker::default();
        let entries = ranker.rank(&ds);

        let five: Vec<_> = keywords_for_rating(&entries, 5)
            .iter()
            .map(|e| (e.keyword.as_str(), e.count))
            .collect();
        assert_eq!(five[0], ("편해요", 3));

        let one: Vec<_> = keywords_for_rating(&entries, 1)
            .iter()
            .map(|e| (e.keyword.as_str(), e.count))
            .collect();
        assert_eq!(one, vec![("불편해요", 1)]);
    }

    #[test]
    fn test_rank_caps_at_top_n() {
        let ds = dataset(vec![(4.0, "하나 둘도 셋도 넷도 다섯")]);
        let ranker = KeywordRanker::new(Tokenizer::new(), 3);
        let entries = ranker.rank(&ds);
        assert!(keywords_for_rating(&entries, 4).len() <= 3);
    }

    #[test]
    fn test_rank_counts_non_increasing() {
        let ds = dataset(vec![
            (3.0, "무게 무게 무게 조립 조립 색상"),
            (3.0, "조립 무게"),
        ]);
        let entries = KeywordRanker::default().rank(&ds);
        let counts: Vec<usize> = keywords_for_rating(&entries, 3)
            .iter()
            .map(|e| e.count)
            .collect();
        for pair in counts.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn test_tie_break_is_first_occurrence() {
        // "바퀴" and "안장" both occur twice; "바퀴" was seen first
        let ds = dataset(vec![(2.0, "바퀴 안장 바퀴 안장 페달")]);
        let entries = KeywordRanker::new(Tokenizer::new(), 2).rank(&ds);
        let two: Vec<&str> = keywords_for_rating(&entries, 2)
            .iter()
            .map(|e| e.keyword.as_str())
            .collect();
        assert_eq!(two, vec!["바퀴", "안장"]);
    }

    #[test]
    fn test_only_present_ratings_emitted() {
        let ds = dataset(vec![(5.0, "좋아요"), (1.0, "별로예요")]);
        let entries = KeywordRanker::default().rank(&ds);
        assert_eq!(ratings_present(&entries), vec![1, 5]);
    }

    #[test]
    fn test_fractional_ratings_share_bucket() {
        let ds = dataset(vec![(4.6, "좋아요"), (5.0, "좋아요")]);
        let entries = KeywordRanker::default().rank(&ds);
        assert_eq!(keywords_for_rating(&entries, 5)[0].count, 2);
    }

    #[test]
    fn test_missing_text_contributes_nothing() {
        let mut ds = dataset(vec![(5.0, "좋아요")]);
        ds.reviews.push(Review::new(5.0, None));
        let entries = KeywordRanker::default().rank(&ds);
        assert_eq!(keywords_for_rating(&entries, 5).len(), 1);
    }

    #[test]
    fn test_top3_summary_format() {
        let entries = vec![
            KeywordEntry {
                rating: 1,
                keyword: "불편".to_string(),
                count: 4,
            },
            KeywordEntry {
                rating: 5,
                keyword: "편해요".to_string(),
                count: 9,
            },
            KeywordEntry {
                rating: 5,
                keyword: "배송".to_string(),
                count: 7,
            },
            KeywordEntry {
                rating: 5,
                keyword: "가벼움".to_string(),
                count: 2,
            },
        ];
        let summary = top3_summary(&entries);
        assert_eq!(
            summary,
            vec![
                (1, "불편(4)".to_string()),
                (5, "편해요(9) / 배송(7) / 가벼움(2)".to_string()),
            ]
        );
    }
}
