//! # portal-client
//!
//! Leptos + WASM frontend for the student/lecturer reporting portal.
//! Students log in, browse lecture reports, submit one rating per
//! report, and leave free-text feedback; registration covers the
//! student, lecturer, PRL, and PL roles.
//!
//! The crate is presentation-layer only: form state, REST calls to the
//! backend, and conditional rendering. Authentication, rating
//! uniqueness, and persistence are owned by the backend this client
//! talks to.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
