//! Moderator console: report queue, health metrics, bans, channel enrollment.

#[cfg(test)]
#[path = "moderation_test.rs"]
mod moderation_test;

use leptos::prelude::*;

use crate::components::charts::{LineSeries, TrendChart};
use crate::components::panel::Panel;
use crate::net::api;
use crate::net::types::{Ban, ModerationQueueItem, Report};
use crate::state::session::Session;
use crate::util::time;

/// One weekday bucket of report load vs resolutions, Sunday first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealthRow {
    pub day: &'static str,
    pub reports: u32,
    pub resolved: u32,
}

/// Bucket incoming reports and resolved queue items per weekday. Entries
/// without a parseable timestamp are skipped.
pub fn weekly_health(reports: &[Report], queue: &[ModerationQueueItem]) -> Vec<HealthRow> {
    let mut rows: Vec<HealthRow> = time::DAY_LABELS
        .iter()
        .map(|&day| HealthRow { day, reports: 0, resolved: 0 })
        .collect();
    for report in reports {
        if let Some(index) = report.created_at.as_deref().and_then(time::weekday_index) {
            rows[index].reports += 1;
        }
    }
    for item in queue {
        if item.status.as_deref() != Some("RESOLVED") {
            continue;
        }
        if let Some(index) = item.flagged_at.as_deref().and_then(time::weekday_index) {
            rows[index].resolved += 1;
        }
    }
    rows
}

/// Urgency bands derived from the AI moderation score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Severity::High => "queue-chip--high",
            Severity::Medium => "queue-chip--medium",
            Severity::Low => "queue-chip--low",
        }
    }
}

/// Band an item by its moderation score, falling back to the legacy field.
pub fn queue_severity(item: &ModerationQueueItem) -> Severity {
    let score = item.ai_moderation_score.or(item.score).unwrap_or(0.0);
    if score > 0.7 {
        Severity::High
    } else if score > 0.4 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Ban reason annotated with the channel it applies to.
pub fn channel_ban_reason(reason: &str, channel_name: &str) -> String {
    format!("{reason} (Channel: {channel_name})")
}

/// `("Temporary" | "Permanent", expiry)` display pair for a ban row.
pub fn ban_expiry(ban: &Ban) -> (&'static str, String) {
    let expires = ban.ban_expires_at.as_deref().or(ban.expires_at.as_deref());
    match expires {
        Some(at) => ("Temporary", time::short_date(Some(at))),
        None => ("Permanent", "N/A".to_owned()),
    }
}

const AUTOMOD_RULES: [(&str, bool); 3] = [
    ("Flag posts with 3+ reports in 1 hour", true),
    ("Auto-hide suspicious links", true),
    ("Slow mode after 5 duplicate posts", false),
];

#[component]
pub fn ModerationPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let token = move || session.get().token;

    let queue = LocalResource::new(move || {
        let token = token();
        async move {
            match token {
                Some(token) => api::moderation_queue(&token).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });
    let actions = LocalResource::new(move || {
        let token = token();
        async move {
            match token {
                Some(token) => api::moderation_actions(&token).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });
    let bans = LocalResource::new(move || {
        let token = token();
        async move {
            match token {
                Some(token) => api::bans(&token).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });
    let reports = LocalResource::new(move || {
        let token = token();
        async move {
            match token {
                Some(token) => api::reports(&token).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });
    let channels = LocalResource::new(|| async { api::channels(0, 100).await.unwrap_or_default() });

    let selected_channel = RwSignal::new(None::<i64>);
    Effect::new(move || {
        if selected_channel.get_untracked().is_none() {
            if let Some(first) = channels.get().and_then(|list| list.first().map(|c| c.id)) {
                selected_channel.set(Some(first));
            }
        }
    });

    let subscribers = LocalResource::new(move || {
        let token = token();
        let channel = selected_channel.get();
        async move {
            match (token, channel) {
                (Some(token), Some(channel)) => {
                    api::channel_subscribers(channel, &token).await.unwrap_or_default()
                }
                _ => Vec::new(),
            }
        }
    });

    let ban_reason = RwSignal::new("Channel policy violation".to_owned());

    let on_review = move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let state = session.get_untracked();
            let (Some(token), Some(user)) = (state.token, state.user) else {
                return;
            };
            leptos::task::spawn_local(async move {
                if api::review_moderation_item(&id, &user.username, "RESOLVED", "APPROVED", &token)
                    .await
                    .is_ok()
                {
                    queue.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let on_remove = move |user_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            let token = session.get_untracked().token;
            let channel = selected_channel.get_untracked();
            let (Some(token), Some(channel)) = (token, channel) else {
                return;
            };
            leptos::task::spawn_local(async move {
                if api::unsubscribe_user(user_id, channel, &token).await.is_ok() {
                    subscribers.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = user_id;
    };

    let on_ban = move |user_id: i64| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::BanCreate;

            let state = session.get_untracked();
            let channel = selected_channel.get_untracked();
            let (Some(token), Some(channel)) = (state.token, channel) else {
                return;
            };
            let channel_name = channels
                .get_untracked()
                .unwrap_or_default()
                .iter()
                .find(|c| c.id == channel)
                .map_or_else(|| "channel".to_owned(), |c| c.name.clone());
            let payload = BanCreate {
                user_id,
                banned_by: state.user.map(|u| u.id),
                reason: Some(channel_ban_reason(&ban_reason.get_untracked(), &channel_name)),
                duration: None,
                expires_at: None,
                created_at: Some(chrono::Utc::now().to_rfc3339()),
            };
            leptos::task::spawn_local(async move {
                if api::create_ban(&payload, &token).await.is_ok() {
                    let _ = api::unsubscribe_user(user_id, channel, &token).await;
                    subscribers.refetch();
                    bans.refetch();
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = user_id;
    };

    view! {
        <div class="moderation-page">
            <section class="moderation-page__top">
                <Panel title="Report queue with context" subtitle="Prioritize by impact and urgency">
                    {move || {
                        let items = queue.get().unwrap_or_default();
                        if items.is_empty() {
                            view! { <p class="panel__note">"No queued reports right now."</p> }
                                .into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|item| {
                                    let severity = queue_severity(&item);
                                    let id = item.id.clone();
                                    let on_review = on_review;
                                    view! {
                                        <div class="queue-card">
                                            <div class="queue-card__head">
                                                <div>
                                                    <p class="queue-card__id">{item.id.clone()}</p>
                                                    <p class="queue-card__title">
                                                        {format!(
                                                            "{} flagged",
                                                            item.content_type.clone().unwrap_or_else(|| "Report".to_owned()),
                                                        )}
                                                    </p>
                                                </div>
                                                <span class=format!("queue-chip {}", severity.class())>
                                                    {item.status.clone().unwrap_or_else(|| "Open".to_owned())}
                                                </span>
                                            </div>
                                            <p class="queue-card__reason">
                                                {item
                                                    .reason
                                                    .clone()
                                                    .or(item.content_text.clone())
                                                    .unwrap_or_else(|| "No context available.".to_owned())}
                                            </p>
                                            <div class="queue-card__actions">
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=move |_| on_review(id.clone())
                                                >
                                                    "Review"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </Panel>

                <Panel title="Community health metrics" subtitle="Weekly report load and resolution">
                    {move || {
                        let rows = weekly_health(
                            &reports.get().unwrap_or_default(),
                            &queue.get().unwrap_or_default(),
                        );
                        let series = vec![
                            LineSeries {
                                color: "#e76f51",
                                values: rows.iter().map(|r| f64::from(r.reports)).collect(),
                            },
                            LineSeries {
                                color: "#2a9d8f",
                                values: rows.iter().map(|r| f64::from(r.resolved)).collect(),
                            },
                        ];
                        let labels = rows.iter().map(|r| r.day.to_owned()).collect::<Vec<_>>();
                        view! { <TrendChart series=series labels=labels/> }
                    }}
                </Panel>
            </section>

            <section class="moderation-page__middle">
                <Panel title="User moderation history" subtitle="Recent actions across campus">
                    {move || {
                        let items = actions.get().unwrap_or_default();
                        if items.is_empty() {
                            view! { <p class="panel__note">"No moderation actions yet."</p> }
                                .into_any()
                        } else {
                            items
                                .into_iter()
                                .take(5)
                                .map(|item| {
                                    view! {
                                        <div class="action-row">
                                            <div>
                                                <p class="action-row__moderator">
                                                    {format!(
                                                        "@{}",
                                                        item.moderator_username.unwrap_or_else(|| "moderator".to_owned()),
                                                    )}
                                                </p>
                                                <p class="action-row__reason">
                                                    {item.reason.unwrap_or_else(|| "No reason recorded".to_owned())}
                                                </p>
                                            </div>
                                            <div class="action-row__meta">
                                                <p>{item.action_type.unwrap_or_else(|| "Action".to_owned())}</p>
                                                <p>{time::short_date(item.created_at.as_deref())}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </Panel>

                <Panel title="Ban management" subtitle="Active bans and review cadence">
                    {move || {
                        let items = bans.get().unwrap_or_default();
                        if items.is_empty() {
                            view! { <p class="panel__note">"No active bans."</p> }.into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|ban| {
                                    let (kind, expires) = ban_expiry(&ban);
                                    view! {
                                        <div class="ban-card">
                                            <div class="ban-card__head">
                                                <p class="ban-card__user">
                                                    {ban
                                                        .user_id
                                                        .map_or_else(
                                                            || "User ID N/A".to_owned(),
                                                            |id| format!("User ID {id}"),
                                                        )}
                                                </p>
                                                <span class="ban-card__chip">{kind}</span>
                                            </div>
                                            <p class="ban-card__expiry">{format!("Expires: {expires}")}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </Panel>

                <Panel title="Automod rule configuration" subtitle="Toggle triggers based on context">
                    {AUTOMOD_RULES
                        .iter()
                        .map(|&(rule, active)| {
                            view! {
                                <div class="automod-row">
                                    <p class="automod-row__rule">{rule}</p>
                                    <span
                                        class="automod-row__state"
                                        class:automod-row__state--active=active
                                    >
                                        {if active { "Active" } else { "Paused" }}
                                    </span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </Panel>
            </section>

            <Panel title="Channel enrollment & bans" subtitle="Manage who is enrolled in a channel">
                <div class="enrollment">
                    <div class="enrollment__controls">
                        <label class="enrollment__label">
                            "Channel"
                            <select
                                class="enrollment__select"
                                on:change=move |ev| {
                                    selected_channel.set(event_target_value(&ev).parse().ok());
                                }
                            >
                                {move || {
                                    let selected = selected_channel.get();
                                    channels
                                        .get()
                                        .unwrap_or_default()
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
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                        </label>
                        <label class="enrollment__label">
                            "Ban reason"
                            <input
                                type="text"
                                class="enrollment__input"
                                prop:value=move || ban_reason.get()
                                on:input=move |ev| ban_reason.set(event_target_value(&ev))
                            />
                        </label>
                        <p class="enrollment__hint">
                            "This action removes the user from the channel and creates a ban record."
                        </p>
                    </div>

                    <div class="enrollment__list">
                        {move || {
                            let items = subscribers.get().unwrap_or_default();
                            if items.is_empty() {
                                view! {
                                    <p class="panel__note">"No enrolled users for this channel."</p>
                                }
                                    .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|subscriber| {
                                        let user_id = subscriber.user_id;
                                        view! {
                                            <div class="enrollment__row">
                                                <p class="enrollment__user">
                                                    {format!("User ID {user_id}")}
                                                </p>
                                                <div class="enrollment__actions">
                                                    <button
                                                        class="btn"
                                                        on:click=move |_| on_remove(user_id)
                                                    >
                                                        "Remove"
                                                    </button>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| on_ban(user_id)
                                                    >
                                                        "Ban from channel"
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </Panel>
        </div>
    }
}
