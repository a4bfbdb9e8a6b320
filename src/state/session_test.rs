use super::*;
use crate::net::types::AuthResponse;
use crate::util::storage::MemoryStore;
use futures::executor::block_on;

fn sample_user() -> UserInfo {
    UserInfo {
        id: 7,
        username: "casey".to_owned(),
        email: "casey@uni.edu".to_owned(),
        real_name: None,
        university_id: Some(3),
        university_name: Some("State".to_owned()),
        verification_status: Some("VERIFIED".to_owned()),
    }
}

fn auth_response(token: &str) -> AuthResponse {
    AuthResponse {
        access_token: token.to_owned(),
        refresh_token: Some("refresh-1".to_owned()),
        token_type: None,
        expires_in: None,
        user: Some(sample_user()),
    }
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn init_with_absent_snapshot_marks_initialized_and_empty() {
    let store = MemoryStore::default();
    let session = RwSignal::new(Session::default());
    block_on(init(session, &store));

    let state = session.get_untracked();
    assert!(state.initialized);
    assert!(state.token.is_none());
    assert!(state.error.is_none());
}

#[test]
fn init_with_malformed_snapshot_discards_it_silently() {
    let store = MemoryStore::default();
    store.write(STORAGE_KEY, "{definitely not json");
    let session = RwSignal::new(Session::default());
    block_on(init(session, &store));

    let state = session.get_untracked();
    assert!(state.initialized);
    assert!(state.token.is_none());
    assert!(state.error.is_none());
    assert!(store.read(STORAGE_KEY).is_none());
}

#[test]
fn init_with_empty_token_snapshot_is_treated_as_absent() {
    let store = MemoryStore::default();
    store.write(STORAGE_KEY, r#"{"token":""}"#);
    let session = RwSignal::new(Session::default());
    block_on(init(session, &store));

    let state = session.get_untracked();
    assert!(state.initialized);
    assert!(state.token.is_none());
}

#[test]
fn init_with_valid_snapshot_adopts_token_before_validation() {
    let store = MemoryStore::default();
    let mut seeded = Session::default();
    seeded.apply_auth_success(&auth_response("tok-9"));
    persist(&store, &seeded);

    let session = RwSignal::new(Session::default());
    block_on(init(session, &store));

    // The profile re-validation cannot reach the API here, but the token
    // adopted from the snapshot must survive that failure.
    let state = session.get_untracked();
    assert!(state.initialized);
    assert_eq!(state.token.as_deref(), Some("tok-9"));
}

// =============================================================
// Snapshot round-trip
// =============================================================

#[test]
fn persisted_snapshot_matches_in_memory_session() {
    let store = MemoryStore::default();
    let mut session = Session::default();
    session.apply_auth_success(&auth_response("tok-1"));
    persist(&store, &session);

    let reloaded = load_snapshot(&store).unwrap();
    assert_eq!(Some(reloaded.token.clone()), session.token);

    let mut rehydrated = Session::default();
    rehydrated.apply_snapshot(reloaded);
    assert_eq!(rehydrated.token, session.token);
    assert_eq!(rehydrated.refresh_token, session.refresh_token);
    assert_eq!(rehydrated.user, session.user);
}

#[test]
fn persist_without_token_clears_storage() {
    let store = MemoryStore::default();
    store.write(STORAGE_KEY, r#"{"token":"stale"}"#);
    persist(&store, &Session::default());
    assert!(store.read(STORAGE_KEY).is_none());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_then_init_yields_empty_session() {
    let store = MemoryStore::default();
    let session = RwSignal::new(Session::default());
    session.update(|s| s.apply_auth_success(&auth_response("tok-2")));
    persist(&store, &session.get_untracked());

    logout(session, &store);
    let state = session.get_untracked();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(state.badges.is_empty());
    assert!(state.error.is_none());

    // Simulated reload.
    let fresh = RwSignal::new(Session::default());
    block_on(init(fresh, &store));
    let state = fresh.get_untracked();
    assert!(state.initialized);
    assert!(state.token.is_none());
}

// =============================================================
// Profile refresh
// =============================================================

#[test]
fn refresh_profile_without_token_is_a_no_op() {
    let store = MemoryStore::default();
    let session = RwSignal::new(Session::default());
    block_on(refresh_profile(session, &store));

    let state = session.get_untracked();
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn refresh_profile_failure_keeps_token_and_sets_error() {
    let store = MemoryStore::default();
    let session = RwSignal::new(Session::default());
    session.update(|s| s.token = Some("abc".to_owned()));

    // Off the browser, the profile fetch always fails like a network error.
    block_on(refresh_profile(session, &store));

    let state = session.get_untracked();
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert!(!state.loading);
    assert!(state.error.as_deref().is_some_and(|e| !e.is_empty()));
}

// =============================================================
// Login / register failure contract
// =============================================================

#[test]
fn login_failure_is_stored_and_resignaled() {
    let store = MemoryStore::default();
    let session = RwSignal::new(Session::default());

    let result = block_on(login(session, &store, "casey", "hunter2"));
    assert!(result.is_err());

    let state = session.get_untracked();
    assert!(!state.loading);
    assert!(state.token.is_none());
    assert_eq!(state.error, result.err());
}

#[test]
fn register_failure_is_stored_and_resignaled() {
    let store = MemoryStore::default();
    let session = RwSignal::new(Session::default());
    let payload = RegisterPayload {
        username: "casey".to_owned(),
        email: "casey@uni.edu".to_owned(),
        password: "hunter2".to_owned(),
        university_id: None,
        real_name: None,
    };

    let result = block_on(register(session, &store, &payload));
    assert!(result.is_err());
    assert!(session.get_untracked().error.is_some());
}

// =============================================================
// Pure transitions
// =============================================================

#[test]
fn begin_request_clears_stale_error() {
    let mut session = Session::default();
    session.error = Some("old failure".to_owned());
    session.begin_request();
    assert!(session.loading);
    assert!(session.error.is_none());
}

#[test]
fn apply_profile_replaces_user_wholesale() {
    let mut session = Session::default();
    session.apply_auth_success(&auth_response("tok-3"));
    let mut updated = sample_user();
    updated.username = "casey-renamed".to_owned();
    session.apply_profile(updated.clone(), Vec::new());
    assert_eq!(session.user, Some(updated));
    assert!(!session.loading);
}

#[test]
fn reset_preserves_initialized_flag() {
    let mut session = Session::default();
    session.mark_initialized();
    session.apply_auth_success(&auth_response("tok-4"));
    session.reset();
    assert!(session.initialized);
    assert!(session.token.is_none());
}
