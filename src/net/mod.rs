//! Networking modules for the backend REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and owns the error policy; `types` defines
//! the wire schema shared by pages and state.

pub mod api;
pub mod types;
