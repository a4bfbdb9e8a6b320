//! # campuscircle
//!
//! Leptos + WASM frontend for the CampusCircle community platform.
//! Presents dashboards, moderation tooling, leaderboards, and profile
//! management over the platform's REST API.
//!
//! This crate contains pages, components, the session store, derived-role
//! and route-guard logic, and the typed API client. Browser-only behavior
//! (HTTP, localStorage) lives behind the `hydrate` feature; the decision
//! logic underneath is plain Rust and unit-tested natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
