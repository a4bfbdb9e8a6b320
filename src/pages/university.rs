//! University staff dashboard: sentiment, campus pulse, trending concerns.

#[cfg(test)]
#[path = "university_test.rs"]
mod university_test;

use leptos::prelude::*;

use crate::components::charts::{DonutChart, DonutSlice, LineSeries, TrendChart};
use crate::components::panel::Panel;
use crate::net::api;
use crate::net::types::{AnalyticsEvent, TrendingCache};
use crate::state::session::Session;
use crate::util::time;

/// A sentiment bucket as a percentage of all classified events.
#[derive(Clone, Debug, PartialEq)]
pub struct SentimentSlice {
    pub name: &'static str,
    pub percent: u32,
    pub color: &'static str,
}

/// Classify events into positive / neutral / negative percentages. Without
/// any events a placeholder distribution is shown so the panel is never
/// blank. Negative is floored at one event so the donut keeps all bands.
pub fn sentiment_breakdown(events: &[AnalyticsEvent]) -> Vec<SentimentSlice> {
    if events.is_empty() {
        return vec![
            SentimentSlice { name: "Positive", percent: 55, color: "#2a9d8f" },
            SentimentSlice { name: "Neutral", percent: 30, color: "#f4a261" },
            SentimentSlice { name: "Negative", percent: 15, color: "#e76f51" },
        ];
    }
    let positive = events
        .iter()
        .filter(|e| e.event_category.as_deref() == Some("engagement"))
        .count();
    let neutral = events
        .iter()
        .filter(|e| e.event_category.as_deref() == Some("navigation"))
        .count();
    let negative = events.iter().filter(|e| e.event_type == "REPORT").count().max(1);
    let total = (positive + neutral + negative).max(1) as f64;
    let percent = |count: usize| (count as f64 / total * 100.0).round() as u32;
    vec![
        SentimentSlice { name: "Positive", percent: percent(positive), color: "#2a9d8f" },
        SentimentSlice { name: "Neutral", percent: percent(neutral), color: "#f4a261" },
        SentimentSlice { name: "Negative", percent: percent(negative), color: "#e76f51" },
    ]
}

/// Per-weekday pulse score, Sunday first: a 60 baseline nudged up by
/// activity and capped at 90.
pub fn pulse_scores(events: &[AnalyticsEvent]) -> Vec<u32> {
    let mut scores = [60_u32; 7];
    for event in events {
        let Some(index) = event.timestamp.as_deref().and_then(time::weekday_index) else {
            continue;
        };
        let bump = if event.event_category.as_deref() == Some("engagement") { 2 } else { 1 };
        scores[index] = (scores[index] + bump).min(90);
    }
    scores.to_vec()
}

/// A trending topic with its mention count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendingTopic {
    pub topic: String,
    pub mentions: u32,
}

/// Top topics from the hashtag/topic snapshot, with a static fallback list
/// when no snapshot exists yet.
pub fn trending_topics(trending: &[TrendingCache]) -> Vec<TrendingTopic> {
    let cache = trending
        .iter()
        .find(|c| c.cache_type == "hashtags" || c.cache_type == "topics");
    let items = cache.and_then(|c| c.items.as_ref()).filter(|items| !items.is_empty());
    let Some(items) = items else {
        return vec![
            TrendingTopic { topic: "Dining affordability".to_owned(), mentions: 320 },
            TrendingTopic { topic: "Library hours".to_owned(), mentions: 240 },
            TrendingTopic { topic: "Transit delays".to_owned(), mentions: 180 },
            TrendingTopic { topic: "Counseling wait times".to_owned(), mentions: 150 },
        ];
    };
    items
        .iter()
        .take(5)
        .map(|item| TrendingTopic {
            topic: item.name.clone().unwrap_or_else(|| "Topic".to_owned()),
            mentions: item.value.or(item.score).unwrap_or(0.0).round() as u32,
        })
        .collect()
}

/// Alert level for the report-volume crisis signal.
pub fn crisis_level(report_count: usize) -> &'static str {
    if report_count > 15 { "Elevated" } else { "Monitor" }
}

#[component]
pub fn UniversityPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let events = LocalResource::new(move || {
        let state = session.get();
        async move {
            let university = state.user.as_ref().and_then(|u| u.university_id);
            match (state.token, university) {
                (Some(token), Some(university)) => {
                    api::analytics_by_university(university, &token).await.unwrap_or_default()
                }
                _ => Vec::new(),
            }
        }
    });
    let trending = LocalResource::new(move || {
        let university = session.get().user.as_ref().and_then(|u| u.university_id);
        async move {
            match university {
                Some(university) => {
                    api::trending_by_university(university).await.unwrap_or_default()
                }
                None => Vec::new(),
            }
        }
    });

    view! {
        <div class="university-page">
            <section class="university-page__top">
                <Panel title="Sentiment analysis" subtitle="Aggregated, anonymized student sentiment">
                    {move || {
                        let slices = sentiment_breakdown(&events.get().unwrap_or_default());
                        let donut = slices
                            .iter()
                            .map(|s| DonutSlice {
                                label: s.name.to_owned(),
                                value: f64::from(s.percent),
                                color: s.color,
                            })
                            .collect::<Vec<_>>();
                        view! {
                            <div class="sentiment">
                                <DonutChart slices=donut/>
                                <div class="sentiment__legend">
                                    {slices
                                        .into_iter()
                                        .map(|slice| {
                                            view! {
                                                <div class="sentiment__row">
                                                    <span
                                                        class="sentiment__dot"
                                                        style=format!("background-color: {}", slice.color)
                                                    ></span>
                                                    <p>
                                                        <strong>{format!("{}%", slice.percent)}</strong>
                                                        {format!(" {}", slice.name)}
                                                    </p>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                    <p class="sentiment__note">
                                        "Updated daily from opt-in student contributions."
                                    </p>
                                </div>
                            </div>
                        }
                    }}
                </Panel>

                <Panel
                    title="Crisis detection alerts"
                    subtitle="Early warning signals for campus leadership"
                >
                    {move || {
                        let report_count = events
                            .get()
                            .unwrap_or_default()
                            .iter()
                            .filter(|e| e.event_type == "REPORT")
                            .count();
                        view! {
                            <div class="alert-card">
                                <div class="alert-card__head">
                                    <p class="alert-card__title">"Reports trend"</p>
                                    <span class="alert-card__chip">{crisis_level(report_count)}</span>
                                </div>
                                <p class="alert-card__details">
                                    {format!("{report_count} reports logged in the last cycle.")}
                                </p>
                            </div>
                        }
                    }}
                </Panel>
            </section>

            <section class="university-page__bottom">
                <Panel title="Campus pulse metrics" subtitle="Daily sentiment score & engagement">
                    {move || {
                        let scores = pulse_scores(&events.get().unwrap_or_default());
                        let series = vec![LineSeries {
                            color: "#1b4965",
                            values: scores.iter().map(|&s| f64::from(s)).collect(),
                        }];
                        let labels = time::DAY_LABELS.iter().map(|&d| d.to_owned()).collect::<Vec<_>>();
                        view! { <TrendChart series=series labels=labels/> }
                    }}
                </Panel>

                <Panel
                    title="Trending topics & concerns"
                    subtitle="Topics with the fastest week-over-week growth"
                >
                    {move || {
                        trending_topics(&trending.get().unwrap_or_default())
                            .into_iter()
                            .map(|topic| {
                                view! {
                                    <div class="topic-row">
                                        <p class="topic-row__name">{topic.topic}</p>
                                        <span class="topic-row__chip">
                                            {format!("{} mentions", topic.mentions)}
                                        </span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </Panel>
            </section>
        </div>
    }
}
