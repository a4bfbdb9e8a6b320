//! Combined sign-in / create-account page.
//!
//! DESIGN
//! ======
//! Navigation away only happens on success; a failed attempt keeps the user
//! here with the store's error message rendered under the form. The guard
//! redirect carries the originally requested path in `?from=`, which this
//! page honors after a successful login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::panel::Panel;
use crate::net::types::RegisterPayload;
use crate::state::session::Session;

/// Which form the page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Extract a single query parameter from a raw search string.
fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .and_then(|(_, v)| urlencoding::decode(v).ok())
        .map(|v| v.into_owned())
}

/// Initial form mode from `?mode=`; anything unrecognized falls back to login.
pub fn mode_from_search(search: &str) -> AuthMode {
    match query_param(search, "mode").as_deref() {
        Some("register") => AuthMode::Register,
        _ => AuthMode::Login,
    }
}

/// Post-login destination from `?from=`. Only same-app absolute paths are
/// honored; everything else lands on the dashboard.
pub fn redirect_target(search: &str) -> String {
    match query_param(search, "from") {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/dashboard".to_owned(),
    }
}

/// Client-side validation mirroring the required fields per mode. Returns a
/// message to show instead of submitting.
pub fn validation_error(
    mode: AuthMode,
    identifier: &str,
    username: &str,
    email: &str,
    password: &str,
) -> Option<&'static str> {
    if password.trim().is_empty() {
        return Some("Password is required.");
    }
    match mode {
        AuthMode::Login if identifier.trim().is_empty() => {
            Some("Enter your username or email.")
        }
        AuthMode::Register if username.trim().is_empty() => Some("Username is required."),
        AuthMode::Register if email.trim().is_empty() => {
            Some("University email is required.")
        }
        _ => None,
    }
}

/// Assemble the registration request from the form fields. The university
/// affiliation is resolved server-side from the email domain, so no id is
/// collected here.
pub fn register_payload(
    username: &str,
    email: &str,
    real_name: &str,
    password: String,
) -> RegisterPayload {
    let name = real_name.trim();
    RegisterPayload {
        username: username.trim().to_owned(),
        email: email.trim().to_owned(),
        password,
        university_id: None,
        real_name: (!name.is_empty()).then(|| name.to_owned()),
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();

    let mode = RwSignal::new(mode_from_search(&location.search.get_untracked()));
    let identifier = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let real_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);

    let search = location.search;
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = mode.get_untracked();
        if let Some(message) = validation_error(
            current,
            &identifier.get_untracked(),
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            form_error.set(Some(message));
            return;
        }
        form_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            use leptos_router::NavigateOptions;

            use crate::state::session;
            use crate::util::storage::BrowserStore;

            let navigate = navigate.clone();
            let target = redirect_target(&search.get_untracked());
            leptos::task::spawn_local(async move {
                let outcome = match current {
                    AuthMode::Login => {
                        session::login(
                            session,
                            &BrowserStore,
                            &identifier.get_untracked(),
                            &password.get_untracked(),
                        )
                        .await
                    }
                    AuthMode::Register => {
                        let payload = register_payload(
                            &username.get_untracked(),
                            &email.get_untracked(),
                            &real_name.get_untracked(),
                            password.get_untracked(),
                        );
                        session::register(session, &BrowserStore, &payload).await
                    }
                };
                if outcome.is_ok() {
                    navigate(&target, NavigateOptions::default());
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &search;
        }
    };

    let mode_button = move |target: AuthMode, label: &'static str| {
        view! {
            <button
                type="button"
                class="auth-page__mode-btn"
                class:auth-page__mode-btn--active=move || mode.get() == target
                on:click=move |_| {
                    mode.set(target);
                    form_error.set(None);
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__intro">
                <p class="auth-page__kicker">"CampusCircle"</p>
                <h1 class="auth-page__title">
                    "Welcome back to the community intelligence hub."
                </h1>
                <p class="auth-page__lead">
                    "Sign in to access dashboards, moderation queues, and university insights."
                </p>
                <div class="auth-page__mode-switch">
                    {mode_button(AuthMode::Login, "Sign in")}
                    {mode_button(AuthMode::Register, "Create account")}
                </div>
            </div>

            <Panel title="Account">
                <form class="auth-page__form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::Register>
                        <label class="auth-page__label">
                            "Username"
                            <input
                                type="text"
                                class="auth-page__input"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-page__label">
                            "University email"
                            <input
                                type="email"
                                class="auth-page__input"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-page__label">
                            "Real name (optional)"
                            <input
                                type="text"
                                class="auth-page__input"
                                prop:value=move || real_name.get()
                                on:input=move |ev| real_name.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <Show when=move || mode.get() == AuthMode::Login>
                        <label class="auth-page__label">
                            "Username or email"
                            <input
                                type="text"
                                class="auth-page__input"
                                prop:value=move || identifier.get()
                                on:input=move |ev| identifier.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <label class="auth-page__label">
                        "Password"
                        <input
                            type="password"
                            class="auth-page__input"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    {move || {
                        form_error
                            .get()
                            .map(|message| view! { <p class="auth-page__error">{message}</p> })
                    }}
                    {move || {
                        session
                            .get()
                            .error
                            .map(|message| view! { <p class="auth-page__error">{message}</p> })
                    }}

                    <button
                        type="submit"
                        class="btn btn--primary auth-page__submit"
                        disabled=move || session.get().loading
                    >
                        {move || {
                            if session.get().loading {
                                "Processing..."
                            } else if mode.get() == AuthMode::Login {
                                "Sign in"
                            } else {
                                "Create account"
                            }
                        }}
                    </button>
                </form>
            </Panel>
        </div>
    }
}
