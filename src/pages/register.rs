//! Registration page: username, password, and role.
//!
//! Registration is stateless with respect to the session: a successful
//! submit only shows a confirmation and resets the form; the new account
//! still has to log in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::alert::Alert;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::types::{RegisterRequest, Role};

/// Banner text after a successful registration.
pub const REGISTER_SUCCESS_MESSAGE: &str = "✅ Registration successful! You can now login.";

#[cfg(any(test, feature = "hydrate"))]
const CANNOT_CONNECT_MESSAGE: &str = "❌ Server error - cannot connect to backend";

/// Presence-only validation; the role always holds a valid variant.
fn validate_registration(
    username: &str,
    password: &str,
    role: Role,
) -> Result<RegisterRequest, &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err("❌ Enter both username and password");
    }
    Ok(RegisterRequest {
        username: username.to_owned(),
        password: password.to_owned(),
        role,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn error_message(error: &ApiError) -> String {
    match error {
        ApiError::Rejected(message) => message.clone(),
        ApiError::Unreachable => CANNOT_CONNECT_MESSAGE.to_owned(),
    }
}

/// Registration page with the enumerated role selector.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::default());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        message.set(String::new());
        let request = match validate_registration(&username.get(), &password.get(), role.get()) {
            Ok(request) => request,
            Err(text) => {
                message.set(text.to_owned());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&request).await {
                Ok(()) => {
                    message.set(REGISTER_SUCCESS_MESSAGE.to_owned());
                    username.set(String::new());
                    password.set(String::new());
                    role.set(Role::default());
                }
                Err(error) => message.set(error_message(&error)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    view! {
        <div class="register-page">
            <h2>"Register"</h2>
            <Alert message=message/>
            <form on:submit=on_submit>
                <div class="mb-3">
                    <label class="form-label">"Username"</label>
                    <input
                        type="text"
                        class="form-control"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </div>
                <div class="mb-3">
                    <label class="form-label">"Password"</label>
                    <input
                        type="password"
                        class="form-control"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <div class="mb-3">
                    <label class="form-label">"Role"</label>
                    <select
                        class="form-select"
                        prop:value=move || role.get().as_str()
                        on:change=move |ev| {
                            role.set(Role::from_value(&event_target_value(&ev)).unwrap_or_default());
                        }
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|option| {
                                view! { <option value=option.as_str()>{option.label()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <button type="submit" class="btn btn-success">
                    "Register"
                </button>
            </form>
        </div>
    }
}
