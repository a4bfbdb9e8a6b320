//! Role derivation from the badge set and user profile.
//!
//! DESIGN
//! ======
//! Flags are recomputed on every read as pure functions of session state.
//! Nothing here is cached, so badge awards and revocations take effect the
//! moment the session's badge set is refreshed.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use super::session::Session;

/// Email address granted admin regardless of badges.
pub const ADMIN_EMAIL: &str = "admin@campuscircle.com";

/// A role a route may require. Exactly one per guarded route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Moderator,
    University,
    Admin,
}

impl Role {
    /// Human-readable label used in access-denied panels.
    pub fn label(self) -> &'static str {
        match self {
            Role::Moderator => "Moderator",
            Role::University => "University admin",
            Role::Admin => "Administrator",
        }
    }
}

/// Derived role flags for the current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleFlags {
    pub is_moderator: bool,
    pub is_admin: bool,
    pub is_university_admin: bool,
}

impl RoleFlags {
    /// Compute the flags from the session's badges and user profile.
    pub fn derive(session: &Session) -> Self {
        let has_badge =
            |kind: &str| session.badges.iter().any(|badge| badge.badge_type == kind);
        let user = session.user.as_ref();

        let is_moderator = has_badge("MODERATOR");
        let is_admin =
            has_badge("ADMIN") || user.is_some_and(|u| u.email == ADMIN_EMAIL);
        let is_verified = user
            .and_then(|u| u.verification_status.as_deref())
            .is_some_and(|status| status == "VERIFIED");
        let has_university = user.is_some_and(|u| u.university_id.is_some());

        Self {
            is_moderator,
            is_admin,
            is_university_admin: is_verified && has_university,
        }
    }

    /// Whether these flags satisfy `role`. Admin overrides every check.
    pub fn satisfies(self, role: Role) -> bool {
        if self.is_admin {
            return true;
        }
        match role {
            Role::Moderator => self.is_moderator,
            Role::University => self.is_university_admin,
            Role::Admin => false,
        }
    }
}
