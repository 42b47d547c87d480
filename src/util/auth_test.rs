use super::*;
use crate::state::session::Session;

#[test]
fn no_redirect_while_restore_in_flight() {
    assert!(!should_redirect(&SessionState::default()));
}

#[test]
fn redirect_once_settled_without_session() {
    assert!(should_redirect(&SessionState::cleared()));
}

#[test]
fn no_redirect_when_authenticated() {
    let state = SessionState::authenticated(Session {
        id: 1,
        role: "student".to_owned(),
        token: "t1".to_owned(),
        username: "alice".to_owned(),
    });
    assert!(!should_redirect(&state));
}
