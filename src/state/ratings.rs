//! Ratings-collection state and the derived "my rating" lookup.
//!
//! DESIGN
//! ======
//! The full collection is the source of truth: after a rating write the
//! dashboard refetches everything (a resync) instead of merging the new
//! record locally, so the derived per-report view always reflects what
//! the backend actually accepted — including its rejection of duplicate
//! `(report, student)` pairs.

#[cfg(test)]
#[path = "ratings_test.rs"]
mod ratings_test;

use crate::net::types::Rating;

/// The full ratings collection as last fetched from the backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatingsState {
    pub items: Vec<Rating>,
}

impl RatingsState {
    /// Replace the whole collection with a freshly fetched one.
    pub fn resync(&mut self, items: Vec<Rating>) {
        self.items = items;
    }

    /// First rating matching both the report and the student, if any.
    ///
    /// A linear scan recomputed per render; collection sizes are small
    /// enough that indexing by `(report_id, student_id)` is not worth it.
    pub fn find_for(&self, report_id: i64, student_id: i64) -> Option<&Rating> {
        self.items
            .iter()
            .find(|rating| rating.report_id == report_id && rating.student_id == student_id)
    }
}
