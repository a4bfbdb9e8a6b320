//! Compact metric card used on dashboard grids.

use leptos::prelude::*;

/// Visual tone for the change chip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Neutral,
    Positive,
    Warning,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Neutral => "stat-card__chip--neutral",
            Tone::Positive => "stat-card__chip--positive",
            Tone::Warning => "stat-card__chip--warning",
        }
    }
}

/// A labeled headline number with an optional change chip. `value` accepts
/// either a fixed string or a derived signal.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] change: String,
    #[prop(optional)] tone: Tone,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__label">{label}</p>
            <div class="stat-card__row">
                <p class="stat-card__value">{move || value.get()}</p>
                {(!change.is_empty()).then(|| {
                    view! {
                        <span class=format!("stat-card__chip {}", tone.class())>{change.clone()}</span>
                    }
                })}
            </div>
        </div>
    }
}
