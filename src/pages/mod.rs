//! Page components, one per route.

pub mod advanced_search;
pub mod auth;
pub mod channel_analytics;
pub mod channel_badges;
pub mod dashboard;
pub mod leaderboards;
pub mod moderation;
pub mod profile;
pub mod university;
