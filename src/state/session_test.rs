use super::*;

// =============================================================
// Session construction
// =============================================================

#[test]
fn from_login_maps_all_response_fields() {
    let session = Session::from_login(LoginResponse {
        user_id: 1,
        role: "student".to_owned(),
        token: "t1".to_owned(),
        username: "alice".to_owned(),
    });
    assert_eq!(
        session,
        Session {
            id: 1,
            role: "student".to_owned(),
            token: "t1".to_owned(),
            username: "alice".to_owned(),
        }
    );
}

#[test]
fn session_storage_json_uses_stable_keys() {
    let session = Session {
        id: 1,
        role: "student".to_owned(),
        token: "t1".to_owned(),
        username: "alice".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&session).unwrap(),
        serde_json::json!({
            "id": 1,
            "role": "student",
            "token": "t1",
            "username": "alice"
        })
    );
}

// =============================================================
// SessionState lifecycle
// =============================================================

#[test]
fn session_state_default_is_loading_without_user() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.session.is_none());
}

#[test]
fn restored_settles_loading() {
    let state = SessionState::restored(None);
    assert!(!state.loading);
    assert!(state.session.is_none());
}

#[test]
fn authenticated_holds_session() {
    let session = Session {
        id: 3,
        role: "student".to_owned(),
        token: "t".to_owned(),
        username: "bob".to_owned(),
    };
    let state = SessionState::authenticated(session.clone());
    assert!(!state.loading);
    assert_eq!(state.session, Some(session));
    assert_eq!(state.student_id(), Some(3));
}

#[test]
fn cleared_drops_session() {
    let state = SessionState::cleared();
    assert!(!state.loading);
    assert_eq!(state.student_id(), None);
}
