//! Login page: username + password against `POST /api/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::alert::Alert;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::types::LoginRequest;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::LoginResponse;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::session::Session;
use crate::state::session::SessionState;

/// Banner text after a successful login.
pub const LOGIN_SUCCESS_MESSAGE: &str = "✅ Login successful!";

#[cfg(any(test, feature = "hydrate"))]
const CANNOT_CONNECT_MESSAGE: &str = "❌ Server error - cannot connect to backend";

/// Presence-only validation; no format rules beyond non-empty fields.
fn validate_credentials(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err("❌ Enter both username and password");
    }
    Ok(LoginRequest {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn error_message(error: &ApiError) -> String {
    match error {
        ApiError::Rejected(message) => message.clone(),
        ApiError::Unreachable => CANNOT_CONNECT_MESSAGE.to_owned(),
    }
}

/// Fold a login result into the next session state and banner text.
///
/// On failure the current session state is returned untouched; only the
/// banner changes. The caller persists and navigates on success.
#[cfg(any(test, feature = "hydrate"))]
fn login_transition(
    current: SessionState,
    result: Result<LoginResponse, ApiError>,
) -> (SessionState, String) {
    match result {
        Ok(response) => {
            let session = Session::from_login(response);
            (
                SessionState::authenticated(session),
                LOGIN_SUCCESS_MESSAGE.to_owned(),
            )
        }
        Err(error) => (current, error_message(&error)),
    }
}

/// Login page. On success the session is persisted, the context signal
/// is replaced, and the router navigates to the dashboard. On failure
/// the entered form state and the session are left untouched.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        message.set(String::new());
        let request = match validate_credentials(&username.get(), &password.get()) {
            Ok(request) => request,
            Err(text) => {
                message.set(text.to_owned());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&request).await;
                let (next, text) = login_transition(session.get_untracked(), result);
                let logged_in = next.session.is_some();
                if let Some(active) = &next.session {
                    crate::util::session_store::save(active);
                }
                session.set(next);
                message.set(text);
                if logged_in {
                    navigate("/", leptos_router::NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <h2>"Login"</h2>
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
                <button type="submit" class="btn btn-primary">
                    "Login"
                </button>
            </form>
            <p class="mt-3">
                "No account yet? "
                <a href="/register">"Register"</a>
            </p>
        </div>
    }
}
