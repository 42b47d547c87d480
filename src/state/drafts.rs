//! Transient free-text feedback drafts, keyed by report id.
//!
//! Drafts live only in memory: cleared per-report on successful save,
//! never persisted, and lost on navigation.

#[cfg(test)]
#[path = "drafts_test.rs"]
mod drafts_test;

use std::collections::HashMap;

/// One draft per report card's feedback box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackDrafts {
    texts: HashMap<i64, String>,
}

impl FeedbackDrafts {
    /// Current draft for a report; empty string when none.
    pub fn get(&self, report_id: i64) -> String {
        self.texts.get(&report_id).cloned().unwrap_or_default()
    }

    /// Replace the draft for a report as the user types.
    pub fn set(&mut self, report_id: i64, text: String) {
        self.texts.insert(report_id, text);
    }

    /// Drop only this report's draft after a successful save.
    pub fn clear(&mut self, report_id: i64) {
        self.texts.remove(&report_id);
    }
}
