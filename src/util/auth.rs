//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect
//! behavior once session restore has settled.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Whether a protected route should bounce to `/login`.
pub fn should_redirect(state: &SessionState) -> bool {
    !state.loading && state.session.is_none()
}

/// Redirect to `/login` whenever restore has settled and no session is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
