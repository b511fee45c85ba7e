//! Per-role finishing stages: review ordering and average computation.

use crate::model::{ReviewEntry, RoleSummary};

/// Sort a role's reviews by rating, highest first.
///
/// The sort is stable, so reviews with equal ratings keep input order.
pub fn sort_reviews(summary: &mut RoleSummary) {
    summary.reviews.sort_by(|a, b| b.rating.cmp(&a.rating));
}

/// Write `avgPay` and `avgRating` onto a summary.
///
/// A summary with no reviews keeps its initial `0.0` values.
pub fn compute_statistics(summary: &mut RoleSummary) {
    if summary.reviews.is_empty() {
        return;
    }

    summary.avg_pay = mean_of(&summary.reviews, |entry| entry.pay);
    summary.avg_rating = mean_of(&summary.reviews, |entry| entry.rating);
}

/// Arithmetic mean of one numeric field, rounded to 2 decimal places.
fn mean_of<F: Fn(&ReviewEntry) -> i64>(reviews: &[ReviewEntry], field: F) -> f64 {
    let total: i64 = reviews.iter().map(field).sum();
    let mean = total as f64 / reviews.len() as f64;
    (mean * 100.0).round() / 100.0
}
