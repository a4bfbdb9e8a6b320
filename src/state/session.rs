//! Session store: the single source of truth for the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware components read this state; pages trigger the
//! async operations. A serialized snapshot is persisted through a
//! `SnapshotStore` so reloads rehydrate the session without a login flash:
//! `init` trusts persisted data first, then corrects it against `/auth/me`.
//!
//! ERROR HANDLING
//! ==============
//! API failures are absorbed into the `error` field. Only `login` and
//! `register` re-signal their failure to the caller, so the auth form can
//! keep the user on the page. A failed profile refresh never clears the
//! token; transient network trouble must not log the user out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::api;
use crate::net::types::{AuthResponse, Badge, RegisterPayload, UserInfo};
use crate::util::storage::SnapshotStore;

/// localStorage key holding the persisted snapshot.
pub const STORAGE_KEY: &str = "campuscircle_auth";

/// The serialized slice of session state that survives reloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

/// In-memory session state. Mutated only through the operations below; every
/// transition is applied as a single state replacement so observers never see
/// a torn intermediate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<UserInfo>,
    pub badges: Vec<Badge>,
    pub loading: bool,
    /// True once `init` has finished, successfully or not. Guards must not
    /// make a final decision before this is set.
    pub initialized: bool,
    pub error: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Optimistically adopt a persisted snapshot before re-validation.
    pub fn apply_snapshot(&mut self, snapshot: StoredSession) {
        self.token = Some(snapshot.token);
        self.refresh_token = snapshot.refresh_token;
        self.user = snapshot.user;
    }

    /// Enter the loading state for a new request, clearing any stale error.
    pub fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_auth_success(&mut self, response: &AuthResponse) {
        self.token = Some(response.access_token.clone());
        self.refresh_token = response.refresh_token.clone();
        self.user = response.user.clone();
        self.loading = false;
    }

    pub fn apply_auth_failure(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Replace the profile wholesale and adopt the fetched badge set.
    pub fn apply_profile(&mut self, user: UserInfo, badges: Vec<Badge>) {
        self.user = Some(user);
        self.badges = badges;
        self.loading = false;
    }

    /// A profile fetch failed: record the error but keep the token.
    pub fn apply_profile_failure(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    /// Clear everything back to an unauthenticated session. `initialized`
    /// stays as-is; logout does not re-gate the guards.
    pub fn reset(&mut self) {
        self.token = None;
        self.refresh_token = None;
        self.user = None;
        self.badges.clear();
        self.error = None;
        self.loading = false;
    }

    /// The persistable slice of this session, if any token is held.
    pub fn snapshot(&self) -> Option<StoredSession> {
        let token = self.token.clone()?;
        Some(StoredSession {
            token,
            refresh_token: self.refresh_token.clone(),
            user: self.user.clone(),
        })
    }
}

/// Read and parse the persisted snapshot. A malformed entry is discarded from
/// storage and treated as absent; local corruption is never surfaced.
pub fn load_snapshot(store: &impl SnapshotStore) -> Option<StoredSession> {
    let raw = store.read(STORAGE_KEY)?;
    match serde_json::from_str::<StoredSession>(&raw) {
        Ok(snapshot) if !snapshot.token.is_empty() => Some(snapshot),
        _ => {
            store.clear(STORAGE_KEY);
            None
        }
    }
}

/// Re-serialize the session's snapshot, or clear storage when logged out.
/// Called after every successful mutation so storage and memory never diverge.
pub fn persist(store: &impl SnapshotStore, session: &Session) {
    match session.snapshot().and_then(|s| serde_json::to_string(&s).ok()) {
        Some(raw) => store.write(STORAGE_KEY, &raw),
        None => store.clear(STORAGE_KEY),
    }
}

/// Startup rehydration: adopt the persisted snapshot, re-validate it against
/// the API, and finally open the guard gate via `initialized`.
pub async fn init(session: RwSignal<Session>, store: &impl SnapshotStore) {
    match load_snapshot(store) {
        None => session.update(Session::mark_initialized),
        Some(snapshot) => {
            session.update(|s| s.apply_snapshot(snapshot));
            refresh_profile(session, store).await;
            session.update(Session::mark_initialized);
        }
    }
}

/// Authenticate with a username-or-email identifier. On failure the error is
/// both stored and re-signaled so the form can stay put.
pub async fn login(
    session: RwSignal<Session>,
    store: &impl SnapshotStore,
    identifier: &str,
    password: &str,
) -> Result<(), String> {
    session.update(Session::begin_request);
    match api::login(identifier, password).await {
        Ok(response) => {
            session.update(|s| s.apply_auth_success(&response));
            persist(store, &session.get_untracked());
            refresh_profile(session, store).await;
            Ok(())
        }
        Err(message) => {
            session.update(|s| s.apply_auth_failure(message.clone()));
            Err(message)
        }
    }
}

/// Create an account; identical contract to [`login`].
pub async fn register(
    session: RwSignal<Session>,
    store: &impl SnapshotStore,
    payload: &RegisterPayload,
) -> Result<(), String> {
    session.update(Session::begin_request);
    match api::register(payload).await {
        Ok(response) => {
            session.update(|s| s.apply_auth_success(&response));
            persist(store, &session.get_untracked());
            refresh_profile(session, store).await;
            Ok(())
        }
        Err(message) => {
            session.update(|s| s.apply_auth_failure(message.clone()));
            Err(message)
        }
    }
}

/// Synchronous logout: clear storage and reset state. Always succeeds.
pub fn logout(session: RwSignal<Session>, store: &impl SnapshotStore) {
    store.clear(STORAGE_KEY);
    session.update(Session::reset);
}

/// Re-fetch the current profile and badge set with the stored token.
/// No-op without a token. A badge fetch failure is swallowed (badges are an
/// enhancement, not a prerequisite of being logged in); a profile fetch
/// failure sets `error` but deliberately keeps the token.
pub async fn refresh_profile(session: RwSignal<Session>, store: &impl SnapshotStore) {
    let Some(token) = session.get_untracked().token else {
        return;
    };
    session.update(Session::begin_request);
    match api::me(&token).await {
        Ok(user) => {
            let badges = match api::badges_for_user(user.id, &token).await {
                Ok(badges) => badges,
                Err(err) => {
                    log::warn!("badge fetch failed, continuing without badges: {err}");
                    Vec::new()
                }
            };
            session.update(|s| s.apply_profile(user, badges));
            persist(store, &session.get_untracked());
        }
        Err(message) => session.update(|s| s.apply_profile_failure(message)),
    }
}
