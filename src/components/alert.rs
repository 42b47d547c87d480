//! Transient message banner shown above forms and the dashboard.
//!
//! Messages carry a ✅ or ❌ marker; the banner picks its severity class
//! from the marker so call sites only manage one message string.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use leptos::prelude::*;

/// Whether a banner message reports success.
pub fn is_success_message(message: &str) -> bool {
    message.contains('✅')
}

fn alert_class(message: &str, info: bool) -> &'static str {
    if info {
        "alert alert-info"
    } else if is_success_message(message) {
        "alert alert-success"
    } else {
        "alert alert-danger"
    }
}

/// Banner rendered only while `message` is non-empty.
///
/// With `info` set, the neutral style is used regardless of marker (the
/// dashboard shows all its messages that way).
#[component]
pub fn Alert(message: RwSignal<String>, #[prop(optional)] info: bool) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class=move || alert_class(&message.get(), info)>{move || message.get()}</div>
        </Show>
    }
}
