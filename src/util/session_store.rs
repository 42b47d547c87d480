//! Browser localStorage persistence for the authenticated session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two keys are written on login: the full session object as JSON and
//! the bare token string, which the API client re-reads on every call to
//! attach the bearer header. There is no expiry, schema versioning, or
//! encryption; a corrupt or missing store reads back as `None` and API
//! calls silently degrade to unauthenticated requests.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::state::session::Session;

/// localStorage key holding the full session JSON.
pub const SESSION_KEY: &str = "user";
/// localStorage key holding the bare bearer token.
pub const TOKEN_KEY: &str = "token";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Persist the session under both keys.
pub fn save(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(session) else {
            return;
        };
        let _ = storage.set_item(SESSION_KEY, &raw);
        let _ = storage.set_item(TOKEN_KEY, &session.token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Read back the last saved session, or `None` when absent or corrupt.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(SESSION_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read back the bare token, or `None` when absent.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove both keys on logout.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(SESSION_KEY);
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
