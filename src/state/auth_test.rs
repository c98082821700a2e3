use super::*;
use crate::session::MemoryStore;
use bearer::encode_unsigned;
use serde_json::json;

const FAR_FUTURE: i64 = 32_503_680_000;

fn session_with(payload: serde_json::Value) -> SessionManager<MemoryStore> {
    let session = SessionManager::new(MemoryStore::new(), "token");
    session.login(&encode_unsigned(&payload));
    session
}

#[test]
fn pending_state_is_loading_without_user() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn from_session_without_token_has_no_user() {
    let session = SessionManager::new(MemoryStore::new(), "token");
    assert_eq!(AuthState::from_session(&session), AuthState { user: None, loading: false });
}

#[test]
fn from_session_resolves_user() {
    let session = session_with(json!({"sub": "5", "email": "a@b.com", "exp": FAR_FUTURE}));
    let state = AuthState::from_session(&session);
    assert!(!state.loading);
    assert_eq!(state.user.map(|u| u.id), Some(5));
}

#[test]
fn display_name_prefers_full_name() {
    let session = session_with(json!({
        "sub": "5",
        "firstName": "Amal",
        "lastName": "Bennani",
        "exp": FAR_FUTURE
    }));
    let state = AuthState::from_session(&session);
    assert_eq!(state.display_name(), Some("Amal Bennani".to_owned()));
}

#[test]
fn display_name_falls_back_to_email() {
    let session = session_with(json!({"sub": "5", "email": "a@b.com", "exp": FAR_FUTURE}));
    assert_eq!(AuthState::from_session(&session).display_name(), Some("a@b.com".to_owned()));
    assert_eq!(AuthState::default().display_name(), None);
}
