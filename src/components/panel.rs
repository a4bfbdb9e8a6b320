//! Reusable titled panel wrapping page sections.

use leptos::prelude::*;

/// A rounded content panel with an optional title/subtitle header.
#[component]
pub fn Panel(
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] subtitle: String,
    children: Children,
) -> impl IntoView {
    let header = (!title.is_empty() || !subtitle.is_empty()).then(|| {
        view! {
            <header class="panel__header">
                {(!title.is_empty()).then(|| view! { <h3 class="panel__title">{title.clone()}</h3> })}
                {(!subtitle.is_empty())
                    .then(|| view! { <p class="panel__subtitle">{subtitle.clone()}</p> })}
            </header>
        }
    });

    view! { <section class="panel">{header}{children()}</section> }
}
