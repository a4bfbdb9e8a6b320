//! Personal dashboard: karma, saved content, notifications, activity trend.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::charts::{BarChart, BarDatum, LineSeries, TrendChart};
use crate::components::panel::Panel;
use crate::components::stat_card::{StatCard, Tone};
use crate::net::api;
use crate::net::types::{AnalyticsEvent, Channel, Karma, Notification};
use crate::state::session::Session;
use crate::util::time;

/// One weekday bucket of the activity trend, Monday first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrendRow {
    pub day: &'static str,
    pub views: u32,
    pub engagement: u32,
}

const TREND_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const ENGAGEMENT_EVENTS: [&str; 3] = ["UPVOTE", "COMMENT_CREATE", "SHARE"];

/// Bucket raw events into per-weekday view and engagement counts. Events
/// without a parseable timestamp are skipped.
pub fn engagement_trend(events: &[AnalyticsEvent]) -> Vec<TrendRow> {
    let mut rows: Vec<TrendRow> = TREND_DAYS
        .iter()
        .map(|&day| TrendRow { day, views: 0, engagement: 0 })
        .collect();
    for event in events {
        let Some(index) = event
            .timestamp
            .as_deref()
            .and_then(time::weekday_index)
        else {
            continue;
        };
        // weekday_index is Sunday-first; the chart runs Monday-first.
        let row = &mut rows[(index + 6) % 7];
        if event.event_type == "POST_VIEW" {
            row.views += 1;
        }
        if ENGAGEMENT_EVENTS.contains(&event.event_type.as_str()) {
            row.engagement += 1;
        }
    }
    rows
}

pub fn weekly_engagement(rows: &[TrendRow]) -> u32 {
    rows.iter().map(|row| row.engagement).sum()
}

/// Per-channel karma as labeled bars, resolving channel ids to names where
/// the channel list has them.
pub fn karma_by_topic(karma: Option<&Karma>, channels: &[Channel]) -> Vec<BarDatum> {
    let Some(by_channel) = karma.and_then(|k| k.karma_by_channel.as_ref()) else {
        return Vec::new();
    };
    let mut data: Vec<BarDatum> = by_channel
        .iter()
        .map(|(channel_id, &value)| {
            let label = channels
                .iter()
                .find(|channel| channel.id.to_string() == *channel_id)
                .map_or_else(|| format!("Channel {channel_id}"), |channel| channel.name.clone());
            BarDatum { label, value: value as f64 }
        })
        .collect();
    data.sort_by(|a, b| a.label.cmp(&b.label));
    data
}

/// Display title for a notification row.
pub fn notification_title(note: &Notification) -> &str {
    if !note.title.is_empty() {
        &note.title
    } else if !note.message.is_empty() {
        &note.message
    } else {
        "Notification"
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let karma = LocalResource::new(move || {
        let state = session.get();
        async move {
            match (state.token, state.user) {
                (Some(token), Some(user)) => api::karma_for_user(user.id, &token).await.ok(),
                _ => None,
            }
        }
    });
    let saved = LocalResource::new(move || {
        let state = session.get();
        async move {
            match (state.token, state.user) {
                (Some(token), Some(user)) => api::saved_posts(&user.username, &token)
                    .await
                    .map(|library| library.saved_items)
                    .unwrap_or_default(),
                _ => Vec::new(),
            }
        }
    });
    let notes = LocalResource::new(move || {
        let state = session.get();
        async move {
            match (state.token, state.user) {
                (Some(token), Some(user)) => {
                    api::notifications(&user.username, &token).await.unwrap_or_default()
                }
                _ => Vec::new(),
            }
        }
    });
    let events = LocalResource::new(move || {
        let state = session.get();
        async move {
            match (state.token, state.user) {
                (Some(token), Some(user)) => {
                    api::analytics_by_user(user.id, &token).await.unwrap_or_default()
                }
                _ => Vec::new(),
            }
        }
    });
    let channels = LocalResource::new(|| async { api::channels(0, 100).await.unwrap_or_default() });

    let trend = Memo::new(move |_| engagement_trend(&events.get().unwrap_or_default()));

    view! {
        <div class="dashboard-page">
            <section class="stat-grid">
                <StatCard
                    label="Total Karma"
                    value=Signal::derive(move || {
                        karma
                            .get()
                            .flatten()
                            .map_or(0, |k| k.karma_score)
                            .to_string()
                    })
                    change="Synced"
                    tone=Tone::Positive
                />
                <StatCard
                    label="Active Threads"
                    value=Signal::derive(move || {
                        channels.get().unwrap_or_default().len().to_string()
                    })
                    change="Live"
                />
                <StatCard
                    label="Weekly Engagement"
                    value=Signal::derive(move || weekly_engagement(&trend.get()).to_string())
                    change="Last 7d"
                    tone=Tone::Positive
                />
                <StatCard
                    label="Saved Items"
                    value=Signal::derive(move || {
                        saved.get().unwrap_or_default().len().to_string()
                    })
                    change="Library"
                    tone=Tone::Warning
                />
            </section>

            <section class="dashboard-page__columns">
                <Panel
                    title="Personal karma breakdown by topic"
                    subtitle="Live channel karma totals"
                >
                    {move || {
                        let data = karma_by_topic(
                            karma.get().flatten().as_ref(),
                            &channels.get().unwrap_or_default(),
                        );
                        if data.is_empty() {
                            view! { <p class="panel__note">"No channel karma yet."</p> }
                                .into_any()
                        } else {
                            view! { <BarChart data=data/> }.into_any()
                        }
                    }}
                </Panel>

                <div class="dashboard-page__stack">
                    <Panel title="Saved content library" subtitle="Quick access to your bookmarks">
                        {move || {
                            let items = saved.get().unwrap_or_default();
                            if items.is_empty() {
                                view! {
                                    <p class="panel__note">
                                        "No saved posts yet. Start bookmarking content."
                                    </p>
                                }
                                    .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .take(3)
                                    .map(|item| {
                                        view! {
                                            <div class="saved-card">
                                                <p class="saved-card__title">{item.post_title}</p>
                                                <div class="saved-card__meta">
                                                    <span>{item.channel_name}</span>
                                                    <span>
                                                        {item.folder.unwrap_or_else(|| "Saved".to_owned())}
                                                    </span>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                        }}
                    </Panel>

                    <Panel title="Notification center" subtitle="Alerts, replies, and system updates">
                        {move || {
                            let items = notes.get().unwrap_or_default();
                            if items.is_empty() {
                                view! { <p class="panel__note">"No new notifications."</p> }
                                    .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .take(3)
                                    .map(|note| {
                                        let unread = note.is_read != Some(true);
                                        view! {
                                            <div
                                                class="notification-row"
                                                class:notification-row--unread=unread
                                            >
                                                {notification_title(&note).to_owned()}
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                        }}
                    </Panel>
                </div>
            </section>

            <Panel title="Post analytics" subtitle="Views and engagement from your activity stream">
                {move || {
                    let rows = trend.get();
                    let series = vec![
                        LineSeries {
                            color: "#1b4965",
                            values: rows.iter().map(|r| f64::from(r.views)).collect(),
                        },
                        LineSeries {
                            color: "#e76f51",
                            values: rows.iter().map(|r| f64::from(r.engagement)).collect(),
                        },
                    ];
                    let labels = rows.iter().map(|r| r.day.to_owned()).collect::<Vec<_>>();
                    view! { <TrendChart series=series labels=labels/> }
                }}
            </Panel>
        </div>
    }
}
