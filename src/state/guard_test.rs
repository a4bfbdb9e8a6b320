use super::*;
use crate::net::types::{Badge, UserInfo};

fn authed_session(token: &str) -> Session {
    let mut session = Session::default();
    session.token = Some(token.to_owned());
    session.initialized = true;
    session
}

// =============================================================
// Pending gate
// =============================================================

#[test]
fn uninitialized_session_is_pending_even_with_a_token() {
    let mut session = Session::default();
    session.token = Some("abc".to_owned());
    assert_eq!(evaluate(&session, None), GuardDecision::Pending);
    assert_eq!(evaluate(&session, Some(Role::Moderator)), GuardDecision::Pending);
}

#[test]
fn loading_session_is_pending() {
    let mut session = authed_session("abc");
    session.loading = true;
    assert_eq!(evaluate(&session, None), GuardDecision::Pending);
}

// =============================================================
// Unauthenticated
// =============================================================

#[test]
fn initialized_session_without_token_redirects_to_login() {
    let mut session = Session::default();
    session.initialized = true;
    assert_eq!(evaluate(&session, None), GuardDecision::Login);
    assert_eq!(evaluate(&session, Some(Role::University)), GuardDecision::Login);
}

#[test]
fn login_redirect_carries_the_requested_path() {
    assert_eq!(login_redirect_path("/moderation"), "/auth?from=%2Fmoderation");
    assert_eq!(login_redirect_path("/"), "/auth");
    assert_eq!(login_redirect_path(""), "/auth");
}

// =============================================================
// Role checks
// =============================================================

#[test]
fn token_without_role_requirement_is_allowed() {
    assert_eq!(evaluate(&authed_session("abc"), None), GuardDecision::Allow);
}

#[test]
fn unmet_university_requirement_denies_without_redirect() {
    let session = authed_session("abc");
    assert_eq!(
        evaluate(&session, Some(Role::University)),
        GuardDecision::Denied(Role::University)
    );
    assert_eq!(Role::University.label(), "University admin");
}

#[test]
fn moderator_badge_satisfies_moderator_requirement() {
    let mut session = authed_session("abc");
    session.badges = vec![Badge {
        id: 1,
        user_id: 7,
        badge_type: "MODERATOR".to_owned(),
        earned_at: None,
        channel_id: None,
    }];
    assert_eq!(evaluate(&session, Some(Role::Moderator)), GuardDecision::Allow);
}

#[test]
fn admin_override_allows_every_role_requirement() {
    let mut session = authed_session("abc");
    session.user = Some(UserInfo {
        id: 1,
        username: "root".to_owned(),
        email: crate::state::roles::ADMIN_EMAIL.to_owned(),
        real_name: None,
        university_id: None,
        university_name: None,
        verification_status: None,
    });
    assert_eq!(evaluate(&session, Some(Role::Moderator)), GuardDecision::Allow);
    assert_eq!(evaluate(&session, Some(Role::University)), GuardDecision::Allow);
    assert_eq!(evaluate(&session, Some(Role::Admin)), GuardDecision::Allow);
}
