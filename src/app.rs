//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session signal is provided here and rehydrated once on mount, before
//! any guard runs its first non-pending evaluation. Every page under the
//! shell layout reads the same `RwSignal<Session>` from context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::require_auth::{RequireAuth, RequireRole};
use crate::components::shell::Shell;
use crate::pages::advanced_search::AdvancedSearchPage;
use crate::pages::auth::AuthPage;
use crate::pages::channel_analytics::ChannelAnalyticsPage;
use crate::pages::channel_badges::ChannelBadgesPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::leaderboards::LeaderboardsPage;
use crate::pages::moderation::ModerationPage;
use crate::pages::profile::ProfilePage;
use crate::pages::university::UniversityPage;
use crate::state::roles::Role;
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context, kicks off snapshot rehydration, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    {
        use crate::state::session;
        use crate::util::storage::BrowserStore;

        leptos::task::spawn_local(async move {
            session::init(session, &BrowserStore).await;
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/campuscircle.css"/>
        <Title text="CampusCircle"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <ParentRoute path=StaticSegment("") view=Shell>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                    />
                    <Route path=StaticSegment("search") view=AdvancedSearchPage/>
                    <Route
                        path=StaticSegment("moderation")
                        view=|| {
                            view! {
                                <RequireRole role=Role::Moderator>
                                    <ModerationPage/>
                                </RequireRole>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("university")
                        view=|| {
                            view! {
                                <RequireRole role=Role::University>
                                    <UniversityPage/>
                                </RequireRole>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                    />
                    <Route path=StaticSegment("leaderboards") view=LeaderboardsPage/>
                    <Route path=StaticSegment("channel-analytics") view=ChannelAnalyticsPage/>
                    <Route
                        path=StaticSegment("channel-badges")
                        view=|| view! { <RequireAuth><ChannelBadgesPage/></RequireAuth> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
