//! Per-channel analytics: growth, active users, popular posts.

#[cfg(test)]
#[path = "channel_analytics_test.rs"]
mod channel_analytics_test;

use leptos::prelude::*;

use crate::components::charts::{BarChart, BarDatum, LineSeries, TrendChart};
use crate::components::panel::Panel;
use crate::net::api;
use crate::net::types::{AnalyticsEvent, Channel};
use crate::state::session::Session;
use crate::util::time;

pub const WEEK_LABELS: [&str; 5] = ["W1", "W2", "W3", "W4", "W5"];

/// Events bucketed into five week-of-month slots by day of month.
pub fn growth_trend(events: &[AnalyticsEvent]) -> [u32; 5] {
    let mut weeks = [0_u32; 5];
    for event in events {
        let Some(day) = event.timestamp.as_deref().and_then(time::day_of_month) else {
            continue;
        };
        let index = ((day / 7) as usize).min(4);
        weeks[index] += 1;
    }
    weeks
}

/// Subscriber counts for the first few channels, as labeled bars.
pub fn active_users(channels: &[Channel]) -> Vec<BarDatum> {
    channels
        .iter()
        .take(4)
        .map(|channel| BarDatum {
            label: channel.name.clone(),
            value: channel.subscriber_count.unwrap_or(0) as f64,
        })
        .collect()
}

/// A popular-post row for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopularPost {
    pub title: String,
    pub channel: String,
    pub engagement: String,
}

/// Most-viewed posts from the event stream, or a static showcase when the
/// channel has no view events yet.
pub fn popular_posts(events: &[AnalyticsEvent], channels: &[Channel]) -> Vec<PopularPost> {
    let posts: Vec<PopularPost> = events
        .iter()
        .filter(|event| event.event_type == "POST_VIEW" && event.content_id.is_some())
        .take(3)
        .map(|event| {
            let channel = channels
                .iter()
                .find(|channel| Some(channel.id) == event.channel_id)
                .map_or("Channel", |channel| channel.name.as_str());
            PopularPost {
                title: format!("Post {}", event.content_id.unwrap_or_default()),
                channel: channel.to_owned(),
                engagement: "N/A".to_owned(),
            }
        })
        .collect();
    if !posts.is_empty() {
        return posts;
    }
    vec![
        PopularPost {
            title: "Internship leads for Spring".to_owned(),
            channel: "Careers".to_owned(),
            engagement: "1.2k".to_owned(),
        },
        PopularPost {
            title: "Best quiet dorm floors".to_owned(),
            channel: "Housing".to_owned(),
            engagement: "980".to_owned(),
        },
        PopularPost {
            title: "Professor ratings thread".to_owned(),
            channel: "Academics".to_owned(),
            engagement: "870".to_owned(),
        },
    ]
}

#[component]
pub fn ChannelAnalyticsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let channels = LocalResource::new(|| async { api::channels(0, 100).await.unwrap_or_default() });

    let selected_channel = RwSignal::new(None::<i64>);
    Effect::new(move || {
        if selected_channel.get_untracked().is_none() {
            if let Some(first) = channels.get().and_then(|list| list.first().map(|c| c.id)) {
                selected_channel.set(Some(first));
            }
        }
    });

    let events = LocalResource::new(move || {
        let token = session.get().token;
        let channel = selected_channel.get();
        async move {
            match (token, channel) {
                (Some(token), Some(channel)) => {
                    api::analytics_by_channel(channel, &token).await.unwrap_or_default()
                }
                _ => Vec::new(),
            }
        }
    });

    view! {
        <div class="channel-analytics-page">
            <Panel title="Channel selector" subtitle="Pick a channel to view analytics">
                <select
                    class="channel-analytics-page__select"
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
                                    <option value=channel.id selected=Some(channel.id) == selected>
                                        {channel.name}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </Panel>

            <section class="channel-analytics-page__charts">
                <Panel title="Growth trends" subtitle="Channel membership over the last 5 weeks">
                    {move || {
                        let weeks = growth_trend(&events.get().unwrap_or_default());
                        let series = vec![LineSeries {
                            color: "#1b4965",
                            values: weeks.iter().map(|&w| f64::from(w)).collect(),
                        }];
                        let labels = WEEK_LABELS.iter().map(|&w| w.to_owned()).collect::<Vec<_>>();
                        view! { <TrendChart series=series labels=labels/> }
                    }}
                </Panel>
                <Panel title="Active users" subtitle="Daily active users by channel">
                    {move || {
                        let data = active_users(&channels.get().unwrap_or_default());
                        view! { <BarChart data=data color="#2a9d8f"/> }
                    }}
                </Panel>
            </section>

            <Panel title="Popular posts" subtitle="Highest engagement in the last 48 hours">
                {move || {
                    popular_posts(
                        &events.get().unwrap_or_default(),
                        &channels.get().unwrap_or_default(),
                    )
                        .into_iter()
                        .map(|post| {
                            view! {
                                <div class="popular-post">
                                    <div>
                                        <p class="popular-post__title">{post.title}</p>
                                        <p class="popular-post__channel">{post.channel}</p>
                                    </div>
                                    <span class="popular-post__chip">
                                        {format!("{} engagements", post.engagement)}
                                    </span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </Panel>
        </div>
    }
}
