//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns authentication state and persistence; `roles` derives
//! privilege flags from it on read; `guard` turns both into per-route render
//! decisions.

pub mod guard;
pub mod roles;
pub mod session;
