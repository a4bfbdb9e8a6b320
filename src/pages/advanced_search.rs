//! Post search with client-side filter refinement.
//!
//! DESIGN
//! ======
//! The server handles the full-text match; channel, university, karma,
//! username, and date filters are applied to the returned set locally so
//! refining filters never refires the search.

#[cfg(test)]
#[path = "advanced_search_test.rs"]
mod advanced_search_test;

use leptos::prelude::*;

use crate::components::panel::Panel;
use crate::net::api;
use crate::net::types::{Channel, PostResult, University};
use crate::util::time;

const SEARCH_LIMIT: u32 = 80;

/// Client-side refinement over raw search results. Empty strings mean the
/// filter is off.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub channel_id: String,
    pub university_id: String,
    pub min_karma: String,
    pub username: String,
    /// `YYYY-MM-DD` bounds, inclusive.
    pub start_date: String,
    pub end_date: String,
}

/// Karma shown and filtered for a result: net score, falling back to upvotes.
pub fn result_karma(result: &PostResult) -> i64 {
    result.net_score.or(result.upvote_count).unwrap_or(0)
}

/// Apply the local filters to the raw result set. University filtering goes
/// through the result's channel; results whose channel is unknown are
/// excluded when that filter is on.
pub fn apply_filters(
    results: &[PostResult],
    filters: &SearchFilters,
    channels: &[Channel],
) -> Vec<PostResult> {
    results
        .iter()
        .filter(|result| {
            if !filters.channel_id.is_empty() && result.channel_id.to_string() != filters.channel_id
            {
                return false;
            }
            if !filters.username.is_empty()
                && !result
                    .author_username
                    .to_lowercase()
                    .contains(&filters.username.to_lowercase())
            {
                return false;
            }
            if let Ok(threshold) = filters.min_karma.parse::<i64>() {
                if result_karma(result) < threshold {
                    return false;
                }
            }
            if let Some(created) = result.created_at.as_deref() {
                if !filters.start_date.is_empty() && !time::on_or_after(created, &filters.start_date)
                {
                    return false;
                }
                if !filters.end_date.is_empty() && !time::on_or_before(created, &filters.end_date) {
                    return false;
                }
            }
            if !filters.university_id.is_empty() {
                let university = channels
                    .iter()
                    .find(|channel| channel.id == result.channel_id)
                    .and_then(|channel| channel.university_id);
                if university.map(|id| id.to_string()) != Some(filters.university_id.clone()) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// University name for a result, resolved through its channel.
pub fn result_university<'a>(
    result: &PostResult,
    channels: &[Channel],
    universities: &'a [University],
) -> &'a str {
    channels
        .iter()
        .find(|channel| channel.id == result.channel_id)
        .and_then(|channel| channel.university_id)
        .and_then(|id| universities.iter().find(|u| u.id == id))
        .map_or("General", |u| u.name.as_str())
}

#[component]
pub fn AdvancedSearchPage() -> impl IntoView {
    let channels = LocalResource::new(|| async { api::channels(0, 100).await.unwrap_or_default() });
    let universities =
        LocalResource::new(|| async { api::universities().await.unwrap_or_default() });

    let query = RwSignal::new(String::new());
    let filters = RwSignal::new(SearchFilters::default());
    let results = RwSignal::new(Vec::<PostResult>::new());
    let loading = RwSignal::new(false);

    let on_search = move |_| {
        let text = query.get_untracked().trim().to_owned();
        if text.is_empty() {
            results.set(Vec::new());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            leptos::task::spawn_local(async move {
                results.set(api::search_posts(&text, SEARCH_LIMIT).await.unwrap_or_default());
                loading.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    let filter_input = move |label: &'static str,
                            kind: &'static str,
                            placeholder: &'static str,
                            write: fn(&mut SearchFilters) -> &mut String| {
        view! {
            <label class="search-page__label">
                {label}
                <input
                    type=kind
                    class="search-page__input"
                    placeholder=placeholder
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| *write(f) = value);
                    }
                />
            </label>
        }
    };

    view! {
        <div class="search-page">
            <Panel title="Advanced Search" subtitle="Filter by topic, campus, and karma thresholds">
                <div class="search-page__filters">
                    <div>
                        {filter_input("Date range", "date", "", |f| &mut f.start_date)}
                        {filter_input("", "date", "", |f| &mut f.end_date)}
                    </div>
                    <label class="search-page__label">
                        "Channel"
                        <select
                            class="search-page__select"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                filters.update(|f| f.channel_id = value);
                            }
                        >
                            <option value="">"All channels"</option>
                            {move || {
                                channels
                                    .get()
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|channel| {
                                        view! {
                                            <option value=channel.id>{channel.name}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    <label class="search-page__label">
                        "University"
                        <select
                            class="search-page__select"
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                filters.update(|f| f.university_id = value);
                            }
                        >
                            <option value="">"All universities"</option>
                            {move || {
                                universities
                                    .get()
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|university| {
                                        view! {
                                            <option value=university.id>{university.name}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    {filter_input("Karma threshold", "number", "50", |f| &mut f.min_karma)}
                    {filter_input("Username", "text", "@user", |f| &mut f.username)}
                </div>

                <div class="search-page__bar">
                    <input
                        type="text"
                        class="search-page__query"
                        placeholder="Search posts..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                on_search(());
                            }
                        }
                    />
                    <button
                        class="btn btn--primary"
                        on:click=move |_| on_search(())
                        disabled=move || loading.get()
                    >
                        {move || if loading.get() { "Searching..." } else { "Run search" }}
                    </button>
                </div>
            </Panel>

            <Panel title="Search results" subtitle="Top matches based on your filters">
                {move || {
                    let channel_list = channels.get().unwrap_or_default();
                    let university_list = universities.get().unwrap_or_default();
                    let matches = apply_filters(&results.get(), &filters.get(), &channel_list);
                    if matches.is_empty() {
                        view! {
                            <p class="panel__note">"No results yet. Run a search to see matches."</p>
                        }
                            .into_any()
                    } else {
                        matches
                            .into_iter()
                            .map(|result| {
                                let university =
                                    result_university(&result, &channel_list, &university_list)
                                        .to_owned();
                                let channel_name = result
                                    .channel_name
                                    .clone()
                                    .or_else(|| {
                                        channel_list
                                            .iter()
                                            .find(|c| c.id == result.channel_id)
                                            .map(|c| c.name.clone())
                                    })
                                    .unwrap_or_else(|| "Channel".to_owned());
                                let karma = result_karma(&result);
                                view! {
                                    <div class="result-card">
                                        <div>
                                            <p class="result-card__title">{result.title.clone()}</p>
                                            <div class="result-card__meta">
                                                <span>{channel_name}</span>
                                                <span>{university}</span>
                                                <span>
                                                    {time::short_date(result.created_at.as_deref())}
                                                </span>
                                            </div>
                                        </div>
                                        <div class="result-card__side">
                                            <span class="result-card__karma">
                                                {format!("+{karma} karma")}
                                            </span>
                                            <span class="result-card__author">
                                                {format!("@{}", result.author_username)}
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
        </div>
    }
}
