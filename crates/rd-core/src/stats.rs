//! Rating distribution statistics

use crate::review::BrandDataset;
use serde::{Deserialize, Serialize};

/// Lowest rating bucket
pub const MIN_RATING: u8 = 1;
/// Highest rating bucket
pub const MAX_RATING: u8 = 5;

/// Map a raw rating to its bucket in 1..=5
///
/// Rounds half away from zero (`f64::round`). The source platform used
/// round-half-to-even; we deliberately pick half-away-from-zero as the
/// single documented rule. Out-of-range values are clamped.
pub fn rating_bucket(raw: f64) -> u8 {
    let rounded = raw.round();
    if rounded < MIN_RATING as f64 {
        MIN_RATING
    } else if rounded > MAX_RATING as f64 {
        MAX_RATING
    } else {
        rounded as u8
    }
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Count and share of one rating bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketStat {
    /// Rating bucket (1..=5)
    pub rating: u8,
    /// Number of reviews in the bucket
    pub count: usize,
    /// Share of the dataset, percent, 1 decimal place
    pub percentage: f64,
}

/// Per-brand rating distribution
///
/// All five buckets are always present, zero-filled where empty, and the
/// counts sum to the dataset size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingDistribution {
    buckets: Vec<BucketStat>,
    total: usize,
}

impl RatingDistribution {
    /// Compute the distribution for a dataset
    pub fn compute(dataset: &BrandDataset) -> Self {
        let mut counts = [0usize; (MAX_RATING - MIN_RATING + 1) as usize];
        for review in &dataset.reviews {
            counts[(rating_bucket(review.rating) - MIN_RATING) as usize] += 1;
        }

        let total = dataset.review_count();
        let buckets = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| BucketStat {
                rating: MIN_RATING + i as u8,
                count,
                percentage: if total == 0 {
                    0.0
                } else {
                    round1(count as f64 / total as f64 * 100.0)
                },
            })
            .collect();

        Self { buckets, total }
    }

    /// All five buckets, rating ascending
    pub fn buckets(&self) -> &[BucketStat] {
        &self.buckets
    }

    /// Look up one bucket
    pub fn bucket(&self, rating: u8) -> Option<&BucketStat> {
        self.buckets.iter().find(|b| b.rating == rating)
    }

    /// Total number of reviews the distribution was computed over
    pub fn total(&self) -> usize {
        self.total
    }

    /// Largest bucket count (used for bar scaling)
    pub fn max_count(&self) -> usize {
        self.buckets.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// One row of the brand comparison summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandSummary {
    /// Brand display label
    pub label: String,
    /// Total number of reviews
    pub review_count: usize,
    /// Mean of the raw ratings
    pub mean_rating: f64,
}

impl BrandSummary {
    /// Build the summary row for a dataset
    pub fn of(dataset: &BrandDataset) -> Self {
        Self {
            label: dataset.brand.label.clone(),
            review_count: dataset.review_count(),
            mean_rating: dataset.mean_rating(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::Review;
    use crate::types::Brand;
    use pretty_assertions::assert_eq;

    fn dataset(ratings: &[f64]) -> BrandDataset {
        BrandDataset::new(
            Brand::new("brand-a", "Brand A"),
            ratings.iter().map(|&r| Review::new(r, None)).collect(),
        )
    }

    #[test]
    fn test_rating_bucket_rounds_half_away_from_zero() {
        assert_eq!(rating_bucket(4.5), 5);
        assert_eq!(rating_bucket(3.5), 4);
        assert_eq!(rating_bucket(2.4), 2);
        assert_eq!(rating_bucket(2.6), 3);
    }

    #[test]
    fn test_rating_bucket_clamps() {
        assert_eq!(rating_bucket(0.2), 1);
        assert_eq!(rating_bucket(7.0), 5);
    }

    #[test]
    fn test_distribution_scenario() {
        // [5,5,4,3,1,1,1] -> {1:3(42.9%), 2:0(0%), 3:1(14.3%), 4:1(14.3%), 5:2(28.6%)}
        let ds = dataset(&[5.0, 5.0, 4.0, 3.0, 1.0, 1.0, 1.0]);
        let dist = RatingDistribution::compute(&ds);

        assert_eq!(dist.total(), 7);
        assert_eq!(dist.bucket(1).unwrap().count, 3);
        assert_eq!(dist.bucket(1).unwrap().percentage, 42.9);
        assert_eq!(dist.bucket(2).unwrap().count, 0);
        assert_eq!(dist.bucket(2).unwrap().percentage, 0.0);
        assert_eq!(dist.bucket(3).unwrap().count, 1);
        assert_eq!(dist.bucket(3).unwrap().percentage, 14.3);
        assert_eq!(dist.bucket(4).unwrap().count, 1);
        assert_eq!(dist.bucket(4).unwrap().percentage, 14.3);
        assert_eq!(dist.bucket(5).unwrap().count, 2);
        assert_eq!(dist.bucket(5).unwrap().percentage, 28.6);
    }

    #[test]
    fn test_counts_sum_to_dataset_size() {
        let ds = dataset(&[1.2, 2.7, 3.5, 4.9, 5.0, 4.4, 2.5, 1.0]);
        let dist = RatingDistribution::compute(&ds);
        let sum: usize = dist.buckets().iter().map(|b| b.count).sum();
        assert_eq!(sum, ds.review_count());
    }

    #[test]
    fn test_percentages_sum_to_roughly_100() {
        let ds = dataset(&[5.0, 5.0, 4.0, 3.0, 1.0, 1.0, 1.0]);
        let dist = RatingDistribution::compute(&ds);
        let sum: f64 = dist.buckets().iter().map(|b| b.percentage).sum();
        assert!((sum - 100.0).abs() <= 0.5, "sum was {sum}");
    }

    #[test]
    fn test_all_five_buckets_present() {
        let ds = dataset(&[5.0]);
        let dist = RatingDistribution::compute(&ds);
        assert_eq!(dist.buckets().len(), 5);
        let ratings: Vec<u8> = dist.buckets().iter().map(|b| b.rating).collect();
        assert_eq!(ratings, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_fractional_ratings_bucketed() {
        let ds = dataset(&[4.5, 4.4]);
        let dist = RatingDistribution::compute(&ds);
        assert_eq!(dist.bucket(5).unwrap().count, 1);
        assert_eq!(dist.bucket(4).unwrap().count, 1);
    }

    #[test]
    fn test_brand_summary() {
        let ds = dataset(&[5.0, 4.0]);
        let summary = BrandSummary::of(&ds);
        assert_eq!(summary.label, "Brand A");
        assert_eq!(summary.review_count, 2);
        assert_eq!(summary.mean_rating, 4.5);
    }
}
