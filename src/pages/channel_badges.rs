//! Badge management for channels the current user created.

#[cfg(test)]
#[path = "channel_badges_test.rs"]
mod channel_badges_test;

use leptos::prelude::*;

use crate::components::panel::Panel;
use crate::net::api;
use crate::net::types::{Badge, Subscription, UserProfile};
use crate::state::session::Session;

/// Badges a channel owner may award, with their descriptions.
pub const AWARDABLE_BADGES: [(&str, &str); 5] = [
    ("MODERATOR", "Channel moderator with special privileges"),
    ("TOP_CONTRIBUTOR", "Highly active and helpful member"),
    ("VERIFIED", "Verified community member"),
    ("HELPER", "Regularly helps other members"),
    ("VETERAN", "Long-standing channel member"),
];

/// Description for a badge type, covering kinds the server publishes beyond
/// the owner-awardable set.
pub fn badge_description(kind: &str) -> &'static str {
    AWARDABLE_BADGES
        .iter()
        .find(|&&(known, _)| known == kind)
        .map_or("Awarded by the CampusCircle team", |&(_, description)| description)
}

/// Badge catalog for the types panel: the server's published list when it is
/// available, the local awardable set otherwise.
pub fn badge_type_catalog(server_types: &[String]) -> Vec<(String, &'static str)> {
    if server_types.is_empty() {
        return AWARDABLE_BADGES
            .iter()
            .map(|&(kind, description)| (kind.to_owned(), description))
            .collect();
    }
    server_types
        .iter()
        .map(|kind| (kind.clone(), badge_description(kind)))
        .collect()
}

/// A subscriber row joined with their profile and channel-scoped badges.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberRow {
    pub subscription: Subscription,
    pub user: Option<UserProfile>,
    pub badges: Vec<Badge>,
}

/// Keep only badges scoped to `channel_id`; site-wide badges are managed
/// elsewhere.
pub fn channel_badges(badges: &[Badge], channel_id: i64) -> Vec<Badge> {
    badges
        .iter()
        .filter(|badge| badge.channel_id == Some(channel_id))
        .cloned()
        .collect()
}

/// Badge types still awardable to a member holding `held`.
pub fn awardable_badges(held: &[Badge]) -> Vec<&'static str> {
    AWARDABLE_BADGES
        .iter()
        .map(|&(kind, _)| kind)
        .filter(|kind| !held.iter().any(|badge| badge.badge_type == *kind))
        .collect()
}

/// Display name for a member row.
pub fn member_name(row: &MemberRow) -> String {
    row.user
        .as_ref()
        .map_or_else(|| format!("User #{}", row.subscription.user_id), |user| {
            user.username.clone()
        })
}

#[cfg(feature = "hydrate")]
async fn load_members(channel_id: i64, token: String) -> Vec<MemberRow> {
    let Ok(subscriptions) = api::channel_subscribers(channel_id, &token).await else {
        return Vec::new();
    };
    let mut rows = Vec::with_capacity(subscriptions.len());
    for subscription in subscriptions {
        let user = api::user_by_id(subscription.user_id, &token).await.ok();
        let badges = api::badges_for_user(subscription.user_id, &token)
            .await
            .map(|all| channel_badges(&all, channel_id))
            .unwrap_or_default();
        rows.push(MemberRow { subscription, user, badges });
    }
    rows
}

#[component]
pub fn ChannelBadgesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let channels = LocalResource::new(move || {
        let state = session.get();
        async move {
            match (state.token, state.user) {
                (Some(token), Some(user)) => {
                    api::channels_by_creator(&user.username, &token).await.unwrap_or_default()
                }
                _ => Vec::new(),
            }
        }
    });

    let badge_catalog = LocalResource::new(move || {
        let token = session.get().token;
        async move {
            match token {
                Some(token) => api::badge_types(&token).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    let selected_channel = RwSignal::new(None::<i64>);
    Effect::new(move || {
        if selected_channel.get_untracked().is_none() {
            if let Some(first) = channels.get().and_then(|list| list.first().map(|c| c.id)) {
                selected_channel.set(Some(first));
            }
        }
    });

    let members = LocalResource::new(move || {
        let token = session.get().token;
        let channel = selected_channel.get();
        async move {
            #[cfg(feature = "hydrate")]
            {
                match (token, channel) {
                    (Some(token), Some(channel)) => load_members(channel, token).await,
                    _ => Vec::new(),
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (token, channel);
                Vec::<MemberRow>::new()
            }
        }
    });

    let on_award = move |user_id: i64, badge_type: String| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::AwardBadgeRequest;

            let token = session.get_untracked().token;
            let channel = selected_channel.get_untracked();
            let (Some(token), Some(channel)) = (token, channel) else {
                return;
            };
            let payload = AwardBadgeRequest { user_id, badge_type, channel_id: Some(channel) };
            leptos::task::spawn_local(async move {
                if api::award_badge(&payload, &token).await.is_ok() {
                    members.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (user_id, badge_type);
    };

    let on_revoke = move |user_id: i64, badge_type: String| {
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token;
            let Some(token) = token else {
                return;
            };
            leptos::task::spawn_local(async move {
                if api::revoke_badge(user_id, &badge_type, &token).await.is_ok() {
                    members.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (user_id, badge_type);
    };

    view! {
        <div class="channel-badges-page">
            <Panel
                title="Channel Badge Management"
                subtitle="Award and manage badges for your channel members"
            >
                {move || {
                    let list = channels.get().unwrap_or_default();
                    if list.is_empty() {
                        return view! {
                            <p class="panel__note">
                                "You haven't created any channels yet. Create a channel to manage \
                                 badges for its members."
                            </p>
                        }
                            .into_any();
                    }
                    let selected = selected_channel.get();
                    view! {
                        <label class="channel-badges-page__label">
                            "Select Channel"
                            <select
                                class="channel-badges-page__select"
                                on:change=move |ev| {
                                    selected_channel.set(event_target_value(&ev).parse().ok());
                                }
                            >
                                {list
                                    .into_iter()
                                    .map(|channel| {
                                        view! {
                                            <option
                                                value=channel.id
                                                selected=Some(channel.id) == selected
                                            >
                                                {channel.name}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    }
                        .into_any()
                }}

                {move || {
                    let rows = members.get().unwrap_or_default();
                    view! {
                        <div class="channel-badges-page__members">
                            <h3 class="channel-badges-page__count">
                                {format!("Channel Members ({})", rows.len())}
                            </h3>
                            {if rows.is_empty() {
                                view! {
                                    <p class="panel__note">"No subscribers in this channel yet."</p>
                                }
                                    .into_any()
                            } else {
                                rows.into_iter()
                                    .map(|row| {
                                        let user_id = row.subscription.user_id;
                                        let name = member_name(&row);
                                        let email = row
                                            .user
                                            .as_ref()
                                            .and_then(|u| u.email.clone())
                                            .unwrap_or_default();
                                        let options = awardable_badges(&row.badges);
                                        view! {
                                            <div class="member-card">
                                                <div>
                                                    <p class="member-card__name">{name}</p>
                                                    <p class="member-card__email">{email}</p>
                                                    <div class="member-card__badges">
                                                        {row
                                                            .badges
                                                            .iter()
                                                            .map(|badge| {
                                                                let kind = badge.badge_type.clone();
                                                                view! {
                                                                    <span class="badge-chip">
                                                                        {badge.badge_type.clone()}
                                                                        <button
                                                                            class="badge-chip__revoke"
                                                                            title="Revoke badge"
                                                                            on:click=move |_| on_revoke(
                                                                                user_id,
                                                                                kind.clone(),
                                                                            )
                                                                        >
                                                                            "x"
                                                                        </button>
                                                                    </span>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </div>
                                                </div>
                                                <select
                                                    class="member-card__award"
                                                    on:change=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        if !value.is_empty() {
                                                            on_award(user_id, value);
                                                        }
                                                    }
                                                >
                                                    <option value="">"Award badge..."</option>
                                                    {options
                                                        .into_iter()
                                                        .map(|kind| {
                                                            view! { <option value=kind>{kind}</option> }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </select>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }}
                        </div>
                    }
                }}
            </Panel>

            <Panel title="Badge Types" subtitle="Available badges you can award">
                <div class="channel-badges-page__types">
                    {move || {
                        badge_type_catalog(&badge_catalog.get().unwrap_or_default())
                            .into_iter()
                            .map(|(kind, description)| {
                                view! {
                                    <div class="badge-type-card">
                                        <p class="badge-type-card__name">{kind}</p>
                                        <p class="badge-type-card__description">{description}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Panel>
        </div>
    }
}
