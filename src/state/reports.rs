//! Report-list state for the student dashboard.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use crate::net::types::Report;

/// Reports fetched on dashboard mount. Read-only after load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportsState {
    pub items: Vec<Report>,
    /// True until the mount-time fetch resolves, success or failure.
    pub loading: bool,
}

impl ReportsState {
    /// Initial state while the mount-time fetch is in flight.
    pub fn loading() -> ReportsState {
        ReportsState {
            items: Vec::new(),
            loading: true,
        }
    }

    /// Replace the collection once the fetch resolves.
    pub fn loaded(items: Vec<Report>) -> ReportsState {
        ReportsState { items, loading: false }
    }
}
