//! Karma leaderboard table.

#[cfg(test)]
#[path = "leaderboards_test.rs"]
mod leaderboards_test;

use leptos::prelude::*;

use crate::components::panel::Panel;
use crate::net::api;
use crate::net::types::LeaderboardEntry;

/// Karma shown for a row: total karma, falling back to upvotes.
pub fn entry_karma(entry: &LeaderboardEntry) -> i64 {
    entry.total_karma.or(entry.total_upvotes).unwrap_or(0)
}

const TIMEFRAMES: [&str; 3] = ["Weekly", "Monthly", "All-time"];

#[component]
pub fn LeaderboardsPage() -> impl IntoView {
    let entries = LocalResource::new(|| async { api::leaderboard().await.unwrap_or_default() });

    view! {
        <div class="leaderboards-page">
            <Panel
                title="Top contributors by karma"
                subtitle="Celebrate students shaping the conversation"
            >
                <div class="leaderboards-page__filters">
                    {TIMEFRAMES
                        .iter()
                        .enumerate()
                        .map(|(index, &label)| {
                            view! {
                                <button
                                    class="btn leaderboards-page__filter"
                                    class:leaderboards-page__filter--active=index == 0
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="leaderboard">
                    <div class="leaderboard__head">
                        <span>"Rank"</span>
                        <span>"Username"</span>
                        <span>"Karma"</span>
                        <span>"Trend"</span>
                    </div>
                    {move || {
                        let rows = entries.get().unwrap_or_default();
                        if rows.is_empty() {
                            view! {
                                <div class="leaderboard__empty">
                                    "No leaderboard data available yet."
                                </div>
                            }
                                .into_any()
                        } else {
                            rows.into_iter()
                                .enumerate()
                                .map(|(index, entry)| {
                                    let karma = entry_karma(&entry);
                                    view! {
                                        <div class="leaderboard__row">
                                            <span class="leaderboard__rank">{index + 1}</span>
                                            <span class="leaderboard__user">
                                                {format!("@{}", entry.username)}
                                            </span>
                                            <span>{karma}</span>
                                            <span class="leaderboard__trend">
                                                {format!("+{}", entry.total_upvotes.unwrap_or(0))}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </div>
            </Panel>
        </div>
    }
}
