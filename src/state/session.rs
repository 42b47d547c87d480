//! Authenticated-session state shared across routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session has an explicit lifecycle: restored from the session store
//! when the app mounts, replaced on login, cleared on logout. Views read
//! it from context instead of reaching into browser storage; only the
//! API client re-reads the persisted token at call time.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::LoginResponse;

/// The locally persisted record of the authenticated identity.
///
/// Field names double as the localStorage JSON schema, so they must not
/// be renamed without migrating stored sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Numeric account identifier; used as `studentId` in write payloads.
    pub id: i64,
    /// Role literal assigned at registration.
    pub role: String,
    /// Bearer token for protected endpoints. Never validated for expiry
    /// client-side; an expired token surfaces as a generic rejection.
    pub token: String,
    pub username: String,
}

impl Session {
    /// Build a session from a successful login response.
    pub fn from_login(response: LoginResponse) -> Session {
        Session {
            id: response.user_id,
            role: response.role,
            token: response.token,
            username: response.username,
        }
    }
}

/// Session state tracking the current identity and restore progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    /// True until the persisted session has been read on mount, so the
    /// unauthenticated redirect does not fire before restore settles.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            session: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// State after session restore has settled.
    pub fn restored(session: Option<Session>) -> SessionState {
        SessionState {
            session,
            loading: false,
        }
    }

    /// State after a successful login.
    pub fn authenticated(session: Session) -> SessionState {
        SessionState {
            session: Some(session),
            loading: false,
        }
    }

    /// State after logout or storage clear.
    pub fn cleared() -> SessionState {
        SessionState::restored(None)
    }

    /// The account id used as `studentId` in write payloads, if logged in.
    pub fn student_id(&self) -> Option<i64> {
        self.session.as_ref().map(|session| session.id)
    }
}
