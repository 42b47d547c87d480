//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `reports`, `ratings`, `drafts`)
//! so individual pages and components can depend on small focused models.
//! Each struct is plain data held in an `RwSignal` provided via context
//! or owned by the page that renders it.

pub mod drafts;
pub mod ratings;
pub mod reports;
pub mod session;
