use crate::storage::Review;
use serde::Serialize;
use utoipa::ToSchema;

/// Aggregate of an article's review notes.
///
/// `min` and `max` serialize as `null` when there are no reviews.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReviewStats {
    pub count: usize,
    pub average: f64,
    pub min: Option<u8>,
    pub max: Option<u8>,
}

/// Compute stats over the reviews of a single article
pub fn review_stats(reviews: &[Review]) -> ReviewStats {
    let notes = reviews.iter().map(|r| r.note);

    let (Some(min), Some(max)) = (notes.clone().min(), notes.clone().max()) else {
        return ReviewStats {
            count: 0,
            average: 0.0,
            min: None,
            max: None,
        };
    };

    let count = reviews.len();
    let sum: u64 = notes.map(u64::from).sum();
    let average = sum as f64 / count as f64;

    ReviewStats {
        count,
        average: (average * 100.0).round() / 100.0,
        min: Some(min),
        max: Some(max),
    }
}
