//! Routing of review records into their owning role summaries.

use crate::model::{InputData, ReviewEntry};
use crate::report::schema::Schema;
use anyhow::{bail, Result};
use std::collections::HashMap;

/// Build the reviewer lookup: user id → display name.
///
/// Duplicate ids overwrite (last write wins).
pub fn user_index(input: &InputData) -> HashMap<i64, &str> {
    input
        .users
        .iter()
        .map(|user| (user.user_id, user.name.as_str()))
        .collect()
}

/// Append every review to its role's summary, in input order.
///
/// A review whose `roleId` matches no role is dropped silently. A review
/// whose `userId` has no entry in the user list aborts the whole transform
/// with an error.
pub fn distribute_reviews(schema: &mut Schema, input: &InputData) -> Result<()> {
    let names = user_index(input);

    for review in &input.reviews {
        let Some(&user) = names.get(&review.user_id) else {
            bail!(
                "review {} references unknown user id {}",
                review.rating_id,
                review.user_id
            );
        };

        let entry = ReviewEntry {
            user: user.to_string(),
            rating: review.overall_score,
            pay: review.hourly_pay,
            review: review.rating_id,
        };

        match schema.find_role_mut(review.role_id) {
            Some(summary) => summary.reviews.push(entry),
            None => {
                tracing::debug!(
                    role_id = review.role_id,
                    rating_id = review.rating_id,
                    "dropping review for unknown role"
                );
            }
        }
    }

    Ok(())
}
