//! Profile customization: interests, major, visibility preferences.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::panel::Panel;
use crate::net::types::UserPreference;
use crate::state::session::Session;

const INTEREST_TAGS: [&str; 6] = [
    "AI & ML",
    "Student Housing",
    "Startup Life",
    "Wellness",
    "Campus Events",
    "Scholarships",
];

/// Defaults for a user with no stored preferences: everything visible.
pub fn default_preferences(username: &str) -> UserPreference {
    UserPreference {
        id: None,
        username: Some(username.to_owned()),
        interests: Some(Vec::new()),
        major: None,
        graduation_year: None,
        show_major: Some(true),
        show_graduation_year: Some(true),
        allow_direct_messages: Some(true),
        share_sentiment_data: Some(true),
    }
}

/// Add the interest if absent, remove it if present.
pub fn toggle_interest(preferences: &mut UserPreference, interest: &str) {
    let interests = preferences.interests.get_or_insert_with(Vec::new);
    if let Some(position) = interests.iter().position(|i| i == interest) {
        interests.remove(position);
    } else {
        interests.push(interest.to_owned());
    }
}

/// Parse the graduation-year field; an empty or non-numeric entry clears it.
pub fn parse_graduation_year(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { trimmed.parse().ok() }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let preferences = RwSignal::new(UserPreference::default());
    let saving = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::net::api;

        Effect::new(move || {
            let state = session.get();
            let (Some(token), Some(user)) = (state.token, state.user) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match api::user_preferences(&user.username, &token).await {
                    Ok(stored) => preferences.set(stored),
                    Err(_) => preferences.set(default_preferences(&user.username)),
                }
            });
        });
    }

    let on_save = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::api;

            let state = session.get_untracked();
            let (Some(token), Some(user)) = (state.token, state.user) else {
                return;
            };
            let mut payload = preferences.get_untracked();
            payload.username = Some(user.username);
            saving.set(true);
            leptos::task::spawn_local(async move {
                if let Ok(stored) = api::upsert_user_preferences(&payload, &token).await {
                    preferences.set(stored);
                }
                saving.set(false);
            });
        }
    };

    let on_reset = move |_| {
        let username = session
            .get_untracked()
            .user
            .map(|user| user.username)
            .unwrap_or_default();
        preferences.set(default_preferences(&username));
    };

    let toggle = move |field: fn(&mut UserPreference) -> &mut Option<bool>, checked: bool| {
        preferences.update(|prefs| *field(prefs) = Some(checked));
    };

    let visibility_options: [(&str, fn(&mut UserPreference) -> &mut Option<bool>, fn(&UserPreference) -> Option<bool>); 4] = [
        ("Show major on profile", |p| &mut p.show_major, |p| p.show_major),
        ("Show graduation year", |p| &mut p.show_graduation_year, |p| p.show_graduation_year),
        ("Allow followers to DM", |p| &mut p.allow_direct_messages, |p| {
            p.allow_direct_messages
        }),
        ("Share anonymous sentiment data", |p| &mut p.share_sentiment_data, |p| {
            p.share_sentiment_data
        }),
    ];

    view! {
        <div class="profile-page">
            <Panel
                title="Profile customization"
                subtitle="All fields are optional and can be hidden anytime."
            >
                <div class="profile-page__grid">
                    <div class="profile-page__fields">
                        <label class="profile-page__label">
                            "Major"
                            <input
                                type="text"
                                class="profile-page__input"
                                placeholder="Computer Science"
                                prop:value=move || {
                                    preferences.get().major.unwrap_or_default()
                                }
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    preferences
                                        .update(|prefs| {
                                            prefs.major = (!value.is_empty()).then_some(value);
                                        });
                                }
                            />
                        </label>
                        <label class="profile-page__label">
                            "Graduation year"
                            <input
                                type="number"
                                class="profile-page__input"
                                placeholder="2027"
                                prop:value=move || {
                                    preferences
                                        .get()
                                        .graduation_year
                                        .map(|year| year.to_string())
                                        .unwrap_or_default()
                                }
                                on:input=move |ev| {
                                    let year = parse_graduation_year(&event_target_value(&ev));
                                    preferences.update(|prefs| prefs.graduation_year = year);
                                }
                            />
                        </label>
                        <div class="profile-page__interests">
                            <p class="profile-page__label">"Interests"</p>
                            <div class="profile-page__tags">
                                {INTEREST_TAGS
                                    .iter()
                                    .map(|&tag| {
                                        let selected = move || {
                                            preferences
                                                .get()
                                                .interests
                                                .is_some_and(|list| list.iter().any(|i| i == tag))
                                        };
                                        view! {
                                            <button
                                                type="button"
                                                class="profile-page__tag"
                                                class:profile-page__tag--selected=selected
                                                on:click=move |_| {
                                                    preferences
                                                        .update(|prefs| toggle_interest(prefs, tag));
                                                }
                                            >
                                                {tag}
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    </div>

                    <div class="profile-page__visibility">
                        <p class="profile-page__visibility-title">"Visibility preferences"</p>
                        {visibility_options
                            .iter()
                            .map(|&(label, set, get)| {
                                view! {
                                    <label class="profile-page__toggle">
                                        <span>{label}</span>
                                        <input
                                            type="checkbox"
                                            prop:checked=move || {
                                                get(&preferences.get()).unwrap_or(false)
                                            }
                                            on:change=move |ev| {
                                                toggle(set, event_target_checked(&ev));
                                            }
                                        />
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="profile-page__actions">
                    <button
                        class="btn btn--primary"
                        on:click=on_save
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Save profile" }}
                    </button>
                    <button class="btn" on:click=on_reset>
                        "Reset"
                    </button>
                </div>
            </Panel>
        </div>
    }
}
