//! Route-wrapping guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `RequireAuth` and `RequireRole` re-evaluate the guard decision on every
//! render, so a session change (logout, badge revocation) immediately changes
//! what a protected route shows.

#[cfg(test)]
#[path = "require_auth_test.rs"]
mod require_auth_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::panel::Panel;
use crate::state::guard::{self, GuardDecision};
use crate::state::roles::Role;
use crate::state::session::Session;

/// Render children only for authenticated sessions; redirect to `/auth`
/// (carrying the requested path) otherwise.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(None, children)
}

/// Render children only when the session satisfies `role` (admin always
/// qualifies); under-privileged users get a denial panel, not a redirect.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    guarded(Some(role), children)
}

fn guarded(required: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();

    move || match guard::evaluate(&session.get(), required) {
        GuardDecision::Pending => view! {
            <div class="guard-pending">
                <p>"Loading session..."</p>
            </div>
        }
        .into_any(),
        GuardDecision::Login => {
            let path = guard::login_redirect_path(&location.pathname.get_untracked());
            view! { <Redirect path=path/> }.into_any()
        }
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Denied(role) => {
            let copy = denial_copy(role);
            view! {
                <Panel title=copy.title subtitle=copy.subtitle>
                    <p class="panel__note">{copy.body}</p>
                </Panel>
            }
            .into_any()
        }
    }
}

/// Static denial text naming the required role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DenialCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static str,
}

pub fn denial_copy(role: Role) -> DenialCopy {
    match role {
        Role::Moderator => DenialCopy {
            title: "Access restricted",
            subtitle: "Moderator access is required for this dashboard.",
            body: "Ask an admin to grant the MODERATOR badge or use another account \
                   with moderator access.",
        },
        Role::University => DenialCopy {
            title: "University access only",
            subtitle: "This dashboard is limited to verified university staff.",
            body: "Verify your university account to unlock aggregated campus insights.",
        },
        Role::Admin => DenialCopy {
            title: "Administrators only",
            subtitle: "This area is limited to platform administrators.",
            body: "Ask an existing administrator for access.",
        },
    }
}
