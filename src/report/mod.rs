//! The aggregation transform.
//!
//! Pure and single-pass: one fully materialized input document in, one
//! output document out. Pipeline order is fixed — build the skeleton,
//! distribute reviews, sort each role's reviews, then compute averages over
//! the now-final review lists.

pub mod distribute;
pub mod schema;
pub mod stats;

pub use distribute::{distribute_reviews, user_index};
pub use schema::Schema;
pub use stats::{compute_statistics, sort_reviews};

use crate::model::{InputData, OutputData};
use anyhow::Result;

/// Reshape the flat input document into the per-company/per-role summary.
///
/// The only failure is a review referencing an unknown user; every other
/// irregularity (unknown role ids, empty lists) is absorbed.
pub fn format_report(input: &InputData) -> Result<OutputData> {
    let mut schema = Schema::from_roles(&input.roles);
    tracing::debug!(
        roles = schema.role_count(),
        reviews = input.reviews.len(),
        users = input.users.len(),
        "built report skeleton"
    );

    distribute_reviews(&mut schema, input)?;

    schema.for_each_role_mut(sort_reviews);
    schema.for_each_role_mut(compute_statistics);

    Ok(schema.into_output())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Review, Role, User};

    fn fixture_input() -> InputData {
        InputData {
            roles: vec![
                Role {
                    role: "Software Developer".into(),
                    role_id: 25,
                    company: "Amazon".into(),
                },
                Role {
                    role: "UX Designer".into(),
                    role_id: 114,
                    company: "Apple".into(),
                },
                Role {
                    role: "Product Manager".into(),
                    role_id: 31,
                    company: "Meta".into(),
                },
            ],
            reviews: vec![
                Review {
                    role_id: 25,
                    rating_id: 9935,
                    overall_score: 1,
                    hourly_pay: 38,
                    user_id: 0,
                },
                Review {
                    role_id: 114,
                    rating_id: 9936,
                    overall_score: 1,
                    hourly_pay: 22,
                    user_id: 1,
                },
                Review {
                    role_id: 114,
                    rating_id: 9937,
                    overall_score: 2,
                    hourly_pay: 36,
                    user_id: 2,
                },
            ],
            users: vec![
                User {
                    name: "Sarah Zhang".into(),
                    user_id: 0,
                },
                User {
                    name: "Rishi Kanabar".into(),
                    user_id: 1,
                },
                User {
                    name: "Christine Cho".into(),
                    user_id: 2,
                },
            ],
        }
    }

    #[test]
    fn end_to_end_scenario() {
        let output = format_report(&fixture_input()).unwrap();

        assert_eq!(output.companies.len(), 3);
        let dev = &output.companies["Amazon"]["Software Developer"];
        assert_eq!(dev.name, "Software Developer");
        assert_eq!(dev.id, 25);
        assert_eq!(dev.avg_pay, 38.0);
        assert_eq!(dev.avg_rating, 1.0);
        assert_eq!(dev.reviews.len(), 1);
        assert_eq!(dev.reviews[0].user, "Sarah Zhang");
        assert_eq!(dev.reviews[0].rating, 1);
        assert_eq!(dev.reviews[0].pay, 38);
        assert_eq!(dev.reviews[0].review, 9935);
    }

    #[test]
    fn multi_review_role_sorted_and_averaged() {
        let output = format_report(&fixture_input()).unwrap();

        let designer = &output.companies["Apple"]["UX Designer"];
        assert_eq!(designer.avg_pay, 29.0);
        assert_eq!(designer.avg_rating, 1.5);
        assert_eq!(designer.reviews.len(), 2);
        // Rating 2 sorted ahead of rating 1.
        assert_eq!(designer.reviews[0].rating, 2);
        assert_eq!(designer.reviews[1].rating, 1);
    }

    #[test]
    fn every_role_gets_a_summary() {
        let output = format_report(&fixture_input()).unwrap();

        let pm = &output.companies["Meta"]["Product Manager"];
        assert_eq!(pm.id, 31);
        assert!(pm.reviews.is_empty());
        assert_eq!(pm.avg_pay, 0.0);
        assert_eq!(pm.avg_rating, 0.0);
    }

    #[test]
    fn unknown_role_review_absent_from_output() {
        let mut input = fixture_input();
        input.reviews.push(Review {
            role_id: 999,
            rating_id: 1234,
            overall_score: 5,
            hourly_pay: 50,
            user_id: 0,
        });

        let output = format_report(&input).unwrap();
        let total: usize = output
            .companies
            .values()
            .flat_map(|roles| roles.values())
            .map(|summary| summary.reviews.len())
            .sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn unknown_user_fails_the_transform() {
        let mut input = fixture_input();
        input.reviews.push(Review {
            role_id: 25,
            rating_id: 1234,
            overall_score: 5,
            hourly_pay: 50,
            user_id: 77,
        });

        assert!(format_report(&input).is_err());
    }

    #[test]
    fn empty_input_gives_empty_document() {
        let input = InputData {
            roles: vec![],
            reviews: vec![],
            users: vec![],
        };

        let output = format_report(&input).unwrap();
        assert_eq!(serde_json::to_string(&output).unwrap(), r#"{"companies":{}}"#);
    }

    #[test]
    fn output_is_deterministic() {
        let input = fixture_input();
        let first = serde_json::to_vec(&format_report(&input).unwrap()).unwrap();
        let second = serde_json::to_vec(&format_report(&input).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
