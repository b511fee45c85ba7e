//! Wire types for the review API.
//!
//! Field names are pinned to the JSON the endpoint speaks: the input document
//! arrives in camelCase (`roleId`, `overallScore`, …) and the output document
//! must serialize with exactly the keys downstream consumers parse
//! (`companies`, `avgPay`, `avgRating`, …).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ── Input document ───────────────────────────────────────────────

/// A position at a company. `role_id` is globally unique across companies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Role name (e.g., "Software Developer").
    pub role: String,
    pub role_id: i64,
    /// Company offering the position.
    pub company: String,
}

/// One submitted review, referencing its role and author by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub role_id: i64,
    pub rating_id: i64,
    pub overall_score: i64,
    pub hourly_pay: i64,
    pub user_id: i64,
}

/// A reviewer. Only used to resolve `user_id` to a display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub user_id: i64,
}

/// The full document fetched from the endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputData {
    pub roles: Vec<Role>,
    pub reviews: Vec<Review>,
    pub users: Vec<User>,
}

// ── Output document ──────────────────────────────────────────────

/// A review with its author resolved to a name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewEntry {
    /// Reviewer display name.
    pub user: String,
    pub rating: i64,
    pub pay: i64,
    /// The original `ratingId` of the submission.
    pub review: i64,
}

/// Aggregated summary for one role: averages plus its formatted reviews.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleSummary {
    pub name: String,
    pub id: i64,
    /// Mean hourly pay across reviews, rounded to 2 decimals. 0.0 when empty.
    pub avg_pay: f64,
    /// Mean rating across reviews, rounded to 2 decimals. 0.0 when empty.
    pub avg_rating: f64,
    pub reviews: Vec<ReviewEntry>,
}

impl RoleSummary {
    /// An empty summary for a freshly seen role.
    pub fn empty(name: impl Into<String>, id: i64) -> Self {
        Self {
            name: name.into(),
            id,
            avg_pay: 0.0,
            avg_rating: 0.0,
            reviews: Vec::new(),
        }
    }
}

/// The document posted back: company name → role name → summary.
///
/// `BTreeMap` keeps key order deterministic, so serializing the same input
/// twice yields byte-identical JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OutputData {
    pub companies: BTreeMap<String, BTreeMap<String, RoleSummary>>,
}
