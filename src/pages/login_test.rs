use super::*;
use crate::net::types::LoginResponse;

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_credentials_requires_both_fields() {
    assert!(validate_credentials("", "x").is_err());
    assert!(validate_credentials("alice", "").is_err());
    assert!(validate_credentials("", "").is_err());
}

#[test]
fn validate_credentials_builds_request_verbatim() {
    let request = validate_credentials("alice", "x").unwrap();
    assert_eq!(request.username, "alice");
    assert_eq!(request.password, "x");
}

// =============================================================
// Session construction & messages
// =============================================================

#[test]
fn successful_login_yields_stored_session_shape() {
    let response = LoginResponse {
        user_id: 1,
        role: "student".to_owned(),
        token: "t1".to_owned(),
        username: "alice".to_owned(),
    };
    let session = Session::from_login(response);
    let state = SessionState::authenticated(session);
    let stored = state.session.unwrap();
    assert_eq!(stored.id, 1);
    assert_eq!(stored.role, "student");
    assert_eq!(stored.token, "t1");
    assert_eq!(stored.username, "alice");
}

#[test]
fn success_message_carries_marker() {
    assert!(crate::components::alert::is_success_message(LOGIN_SUCCESS_MESSAGE));
}

#[test]
fn successful_login_transition_authenticates() {
    let response = LoginResponse {
        user_id: 1,
        role: "student".to_owned(),
        token: "t1".to_owned(),
        username: "alice".to_owned(),
    };
    let (next, text) = login_transition(SessionState::restored(None), Ok(response));
    assert!(next.session.is_some());
    assert!(!next.loading);
    assert_eq!(text, LOGIN_SUCCESS_MESSAGE);
}

#[test]
fn rejected_login_leaves_session_state_unchanged() {
    let current = SessionState::restored(None);
    let error = ApiError::Rejected("Invalid credentials".to_owned());
    let (next, text) = login_transition(current.clone(), Err(error));
    assert_eq!(next, current);
    assert_eq!(text, "Invalid credentials");

    // A still-authenticated session survives a failed re-login attempt.
    let current = SessionState::authenticated(Session {
        id: 1,
        role: "student".to_owned(),
        token: "t1".to_owned(),
        username: "alice".to_owned(),
    });
    let (next, _) = login_transition(current.clone(), Err(ApiError::Unreachable));
    assert_eq!(next, current);
}

#[test]
fn rejected_login_shows_server_text() {
    let error = ApiError::Rejected("Invalid credentials".to_owned());
    assert_eq!(error_message(&error), "Invalid credentials");
}

#[test]
fn unreachable_login_shows_connect_text() {
    assert_eq!(
        error_message(&ApiError::Unreachable),
        "❌ Server error - cannot connect to backend"
    );
}
