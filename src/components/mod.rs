//! Shared UI building blocks.
//!
//! Guard components live here rather than in `state` because they own the
//! redirect and denial rendering; the decision logic itself stays in
//! `state::guard`.

pub mod charts;
pub mod panel;
pub mod require_auth;
pub mod shell;
pub mod stat_card;
