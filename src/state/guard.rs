//! Route-guard decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated on every render of a guarded route. No final decision is made
//! until the session store reports `initialized`, which prevents a
//! flash-redirect to the login page while a persisted session is still being
//! re-validated.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::roles::{Role, RoleFlags};
use super::session::Session;

/// Outcome of evaluating a guarded route against the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not settled yet: render a neutral placeholder, never redirect.
    Pending,
    /// No token: redirect to the login view.
    Login,
    /// Render the protected content.
    Allow,
    /// Authenticated but under-privileged: render a denial panel, no redirect.
    Denied(Role),
}

/// Decide what a guarded route should render right now.
pub fn evaluate(session: &Session, required: Option<Role>) -> GuardDecision {
    if !session.initialized || session.loading {
        return GuardDecision::Pending;
    }
    if !session.is_authenticated() {
        return GuardDecision::Login;
    }
    match required {
        None => GuardDecision::Allow,
        Some(role) => {
            if RoleFlags::derive(session).satisfies(role) {
                GuardDecision::Allow
            } else {
                GuardDecision::Denied(role)
            }
        }
    }
}

/// Login path carrying the originally requested route, so the auth flow can
/// return the user there after signing in.
pub fn login_redirect_path(current_path: &str) -> String {
    if current_path.is_empty() || current_path == "/" {
        "/auth".to_owned()
    } else {
        format!("/auth?from={}", urlencoding::encode(current_path))
    }
}
