//! roleboard — per-company/per-role review aggregation.
//!
//! Fetches a flat document of roles, users, and review submissions, reshapes
//! it into a nested company → role summary with sorted reviews and average
//! pay/rating, and posts the result back to the same endpoint.
//!
//! The transform itself ([`report::format_report`]) is pure and synchronous;
//! all I/O lives in [`api`].

pub mod api;
pub mod model;
pub mod report;
