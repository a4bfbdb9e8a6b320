//! Wire DTOs for the CampusCircle REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's camelCase JSON bodies so serde round-trips
//! stay lossless. Fields the server may omit are `Option` with
//! `#[serde(default)]` so partial payloads never fail deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Token bundle plus optional user, as returned by login and register.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Bearer token for subsequent authenticated calls.
    pub access_token: String,
    /// Long-lived refresh token, when the server issues one.
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// The authenticated user, when the server inlines it.
    #[serde(default)]
    pub user: Option<UserInfo>,
}

/// The current user as returned by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub real_name: Option<String>,
    /// Home university, if the account is tied to one.
    #[serde(default)]
    pub university_id: Option<i64>,
    #[serde(default)]
    pub university_name: Option<String>,
    /// Verification state, e.g. `"VERIFIED"` or `"PENDING"`.
    #[serde(default)]
    pub verification_status: Option<String>,
}

/// An earned badge. Badge types come from a small fixed vocabulary
/// (`MODERATOR`, `ADMIN`, `VERIFIED`, `TOP_CONTRIBUTOR`, `HELPER`, `VETERAN`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: i64,
    pub user_id: i64,
    pub badge_type: String,
    #[serde(default)]
    pub earned_at: Option<String>,
    /// Scoping channel for channel-level badges.
    #[serde(default)]
    pub channel_id: Option<i64>,
}

/// Request body for `POST /badges/award`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardBadgeRequest {
    pub user_id: i64,
    pub badge_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i64>,
}

/// Registration request body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
}

/// Karma totals for a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Karma {
    pub id: i64,
    pub user_id: i64,
    pub karma_score: i64,
    pub post_karma: i64,
    pub comment_karma: i64,
    /// Per-channel karma keyed by channel id (stringified by the server).
    #[serde(default)]
    pub karma_by_channel: Option<HashMap<String, i64>>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A user's saved-post library.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPost {
    pub id: String,
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub saved_items: Vec<SavedPostItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPostItem {
    pub post_id: i64,
    pub post_title: String,
    pub channel_id: i64,
    pub channel_name: String,
    #[serde(default)]
    pub saved_at: Option<String>,
    #[serde(default)]
    pub folder: Option<String>,
}

/// A user notification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub is_read: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A reporter/reason pair attached to a flagged item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserReport {
    pub reporter: String,
    pub reason: String,
}

/// A flagged content item awaiting moderator review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationQueueItem {
    pub id: String,
    #[serde(default)]
    pub content_id: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub content_text: Option<String>,
    #[serde(default)]
    pub author_username: Option<String>,
    #[serde(default)]
    pub flagged_at: Option<String>,
    #[serde(default)]
    pub ai_moderation_score: Option<f64>,
    #[serde(default)]
    pub ai_flags: Option<Vec<String>>,
    #[serde(default)]
    pub user_reports: Option<Vec<UserReport>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub reviewed_by: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<String>,
    #[serde(default)]
    pub moderation_action: Option<String>,
    // Legacy fields still emitted by older queue entries.
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// A recorded moderator action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationAction {
    pub id: i64,
    #[serde(default)]
    pub moderator_username: Option<String>,
    #[serde(default)]
    pub action_type: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A user-submitted content report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: i64,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub reporter_username: Option<String>,
}

/// An active or expired ban record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ban {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub ban_expires_at: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Request body for `POST /bans`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BanCreate {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banned_by: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub duration: Option<i64>,
    pub expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A channel subscription (enrollment) record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: i64,
    pub user_id: i64,
    pub channel_id: i64,
    #[serde(default)]
    pub subscribed_at: Option<String>,
    #[serde(default)]
    pub notification_enabled: Option<bool>,
}

/// Another user's public profile, as returned by `GET /users/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub university_id: Option<i64>,
    #[serde(default)]
    pub university_name: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<i32>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub total_karma: Option<i64>,
    #[serde(default)]
    pub badges: Option<Vec<String>>,
}

/// A discussion channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub university_id: Option<i64>,
    #[serde(default)]
    pub university_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subscriber_count: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: i64,
    pub name: String,
}

/// A post matched by full-text search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResult {
    pub id: i64,
    pub author_username: String,
    pub channel_id: i64,
    #[serde(default)]
    pub channel_name: Option<String>,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub upvote_count: Option<i64>,
    #[serde(default)]
    pub downvote_count: Option<i64>,
    #[serde(default)]
    pub net_score: Option<i64>,
    #[serde(default)]
    pub comment_count: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A raw analytics event from the activity stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub id: String,
    /// Event kind, e.g. `"POST_VIEW"`, `"UPVOTE"`, `"REPORT"`.
    pub event_type: String,
    /// Coarse grouping, e.g. `"engagement"` or `"navigation"`.
    #[serde(default)]
    pub event_category: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub channel_id: Option<i64>,
    #[serde(default)]
    pub university_id: Option<i64>,
    #[serde(default)]
    pub content_id: Option<i64>,
    #[serde(default)]
    pub content_type: Option<String>,
    /// RFC 3339 timestamp.
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A precomputed trending snapshot for a university.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingCache {
    pub id: String,
    /// Snapshot kind, e.g. `"hashtags"` or `"topics"`.
    pub cache_type: String,
    pub university_id: i64,
    pub timeframe: String,
    #[serde(default)]
    pub items: Option<Vec<TrendingItem>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// One row of the karma leaderboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub total_upvotes: Option<i64>,
    #[serde(default)]
    pub total_karma: Option<i64>,
    #[serde(default)]
    pub post_karma: Option<i64>,
    #[serde(default)]
    pub comment_karma: Option<i64>,
}

/// Editable profile preferences; also the upsert request body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub graduation_year: Option<i32>,
    #[serde(default)]
    pub show_major: Option<bool>,
    #[serde(default)]
    pub show_graduation_year: Option<bool>,
    #[serde(default)]
    pub allow_direct_messages: Option<bool>,
    #[serde(default)]
    pub share_sentiment_data: Option<bool>,
}
