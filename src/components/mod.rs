//! Reusable view components.

pub mod alert;
pub mod report_card;
