//! Application chrome: role-filtered sidebar navigation around an outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell only hides links the current session cannot use; the route
//! guards remain the actual enforcement point.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::state::roles::{Role, RoleFlags};
use crate::state::session::{self, Session};
use crate::util::storage::BrowserStore;

/// A sidebar navigation entry, optionally gated by a role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    /// `Some(role)` hides the item unless the session satisfies the role;
    /// `auth_only` hides it from guests.
    pub required: Option<Role>,
    pub auth_only: bool,
}

const NAV_ITEMS: [NavItem; 8] = [
    NavItem { path: "/dashboard", label: "User Dashboard", required: None, auth_only: true },
    NavItem { path: "/search", label: "Advanced Search", required: None, auth_only: false },
    NavItem { path: "/moderation", label: "Moderation", required: Some(Role::Moderator), auth_only: true },
    NavItem { path: "/university", label: "University Intel", required: Some(Role::University), auth_only: true },
    NavItem { path: "/profile", label: "Profile Customization", required: None, auth_only: true },
    NavItem { path: "/leaderboards", label: "Leaderboards", required: None, auth_only: false },
    NavItem { path: "/channel-analytics", label: "Channel Analytics", required: None, auth_only: false },
    NavItem { path: "/channel-badges", label: "Channel Badges", required: None, auth_only: true },
];

/// Navigation entries the current session may see.
pub fn visible_nav_items(session: &Session) -> Vec<NavItem> {
    let flags = RoleFlags::derive(session);
    NAV_ITEMS
        .iter()
        .copied()
        .filter(|item| {
            if item.auth_only && !session.is_authenticated() {
                return false;
            }
            item.required.is_none_or(|role| flags.satisfies(role))
        })
        .collect()
}

/// Short membership descriptor for the sidebar footer.
pub fn membership_label(session: &Session) -> &'static str {
    let flags = RoleFlags::derive(session);
    if flags.is_admin {
        "Administrator"
    } else if flags.is_moderator {
        "Moderator"
    } else if flags.is_university_admin {
        "University admin"
    } else {
        "Member"
    }
}

/// Layout route wrapping every non-auth page.
#[component]
pub fn Shell() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let navigate_auth = navigate.clone();
    let on_sign_out = move |_| {
        session::logout(session, &BrowserStore);
        navigate_auth("/auth", NavigateOptions::default());
    };
    let navigate_sign_in = navigate.clone();
    let on_sign_in = move |_| {
        navigate_sign_in("/auth", NavigateOptions::default());
    };

    view! {
        <div class="shell">
            <aside class="shell__sidebar">
                <div class="shell__brand">
                    <p class="shell__brand-kicker">"CampusCircle"</p>
                    <h1 class="shell__brand-title">"Community Intelligence Hub"</h1>
                </div>
                <nav class="shell__nav">
                    {move || {
                        visible_nav_items(&session.get())
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <a class="shell__nav-link" href=item.path>
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </nav>
                <div class="shell__account">
                    <p class="shell__account-kicker">
                        {move || {
                            if session.get().user.is_some() { "Signed in as" } else { "Guest session" }
                        }}
                    </p>
                    <p class="shell__account-name">
                        {move || {
                            session
                                .get()
                                .user
                                .map_or_else(|| "Visitor".to_owned(), |user| user.username)
                        }}
                    </p>
                    <p class="shell__account-role">{move || membership_label(&session.get())}</p>
                    <Show
                        when=move || session.get().is_authenticated()
                        fallback=move || {
                            let on_sign_in = on_sign_in.clone();
                            view! {
                                <button class="btn shell__auth-btn" on:click=on_sign_in>
                                    "Sign in"
                                </button>
                            }
                        }
                    >
                        <button class="btn shell__auth-btn" on:click=on_sign_out.clone()>
                            "Sign out"
                        </button>
                    </Show>
                </div>
            </aside>
            <div class="shell__main">
                <header class="shell__header">
                    <div>
                        <p class="shell__header-kicker">"Dashboard"</p>
                        <h2 class="shell__header-title">"Live campus signals"</h2>
                    </div>
                </header>
                <main class="shell__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
