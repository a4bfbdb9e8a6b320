//! REST API client for the CampusCircle server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<T, String>`; the message comes from the
//! response body's `error` field when present, else the HTTP status text.
//! Callers absorb failures into state fields instead of panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    AnalyticsEvent, AuthResponse, AwardBadgeRequest, Badge, Ban, BanCreate, Channel, Karma,
    LeaderboardEntry, ModerationAction, ModerationQueueItem, Notification, PostResult,
    RegisterPayload, Report, SavedPost, Subscription, TrendingCache, University, UserInfo,
    UserPreference, UserProfile,
};

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE: &str = "not available on server";

/// Prefix a path with the API mount point (reverse-proxied to the server).
#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("/api{path}")
}

/// Extract a human-readable error from a failed response.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, status_text: &str, body: Option<&serde_json::Value>) -> String {
    if let Some(message) = body
        .and_then(|value| value.get("error"))
        .and_then(|value| value.as_str())
    {
        return message.to_owned();
    }
    if status_text.is_empty() {
        format!("request failed: {status}")
    } else {
        status_text.to_owned()
    }
}

#[cfg(feature = "hydrate")]
async fn parse_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if !resp.ok() {
        let body = resp.json::<serde_json::Value>().await.ok();
        return Err(error_message(resp.status(), &resp.status_text(), body.as_ref()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

async fn get_json<T: DeserializeOwned>(path: &str, token: Option<&str>) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(path);
        let mut req = gloo_net::http::Request::get(&url);
        if let Some(token) = token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = req.send().await.map_err(|e| e.to_string())?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(NOT_AVAILABLE.to_owned())
    }
}

async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
    token: Option<&str>,
) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(path);
        let mut req = gloo_net::http::Request::post(&url);
        if let Some(token) = token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = req
            .json(body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        let _ = serde_json::to_value(body);
        Err(NOT_AVAILABLE.to_owned())
    }
}

async fn patch_json<T: DeserializeOwned>(path: &str, token: &str) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(path);
        let resp = gloo_net::http::Request::patch(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        parse_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(NOT_AVAILABLE.to_owned())
    }
}

async fn delete(path: &str, token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(path);
        let resp = gloo_net::http::Request::delete(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.json::<serde_json::Value>().await.ok();
            return Err(error_message(resp.status(), &resp.status_text(), body.as_ref()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, token);
        Err(NOT_AVAILABLE.to_owned())
    }
}

// ---- Auth ----

/// `POST /auth/login` with a username-or-email identifier.
pub async fn login(username_or_email: &str, password: &str) -> Result<AuthResponse, String> {
    let body = serde_json::json!({
        "usernameOrEmail": username_or_email,
        "password": password,
    });
    post_json("/auth/login", &body, None).await
}

/// `POST /auth/register`.
pub async fn register(payload: &RegisterPayload) -> Result<AuthResponse, String> {
    post_json("/auth/register", payload, None).await
}

/// `GET /auth/me` for the bearer token's user.
pub async fn me(token: &str) -> Result<UserInfo, String> {
    get_json("/auth/me", Some(token)).await
}

// ---- Badges ----

pub async fn badges_for_user(user_id: i64, token: &str) -> Result<Vec<Badge>, String> {
    get_json(&format!("/badges/user/{user_id}"), Some(token)).await
}

pub async fn badge_types(token: &str) -> Result<Vec<String>, String> {
    get_json("/badges/types", Some(token)).await
}

pub async fn award_badge(payload: &AwardBadgeRequest, token: &str) -> Result<Badge, String> {
    post_json("/badges/award", payload, Some(token)).await
}

pub async fn revoke_badge(user_id: i64, badge_type: &str, token: &str) -> Result<(), String> {
    delete(&format!("/badges/user/{user_id}/type/{badge_type}"), token).await
}

// ---- Karma ----

pub async fn leaderboard() -> Result<Vec<LeaderboardEntry>, String> {
    get_json("/karma/leaderboard", None).await
}

pub async fn karma_for_user(user_id: i64, token: &str) -> Result<Karma, String> {
    get_json(&format!("/karma/user/{user_id}"), Some(token)).await
}

// ---- Activity ----

pub async fn notifications(username: &str, token: &str) -> Result<Vec<Notification>, String> {
    get_json(&format!("/notifications/user/{username}"), Some(token)).await
}

pub async fn saved_posts(username: &str, token: &str) -> Result<SavedPost, String> {
    get_json(&format!("/saved-posts/username/{username}"), Some(token)).await
}

// ---- Moderation ----

pub async fn moderation_queue(token: &str) -> Result<Vec<ModerationQueueItem>, String> {
    get_json("/moderation-queue", Some(token)).await
}

pub async fn moderation_queue_by_status(
    status: &str,
    token: &str,
) -> Result<Vec<ModerationQueueItem>, String> {
    get_json(&format!("/moderation-queue/status/{status}"), Some(token)).await
}

/// `PATCH /moderation-queue/{id}/review` recording the reviewing moderator.
pub async fn review_moderation_item(
    id: &str,
    reviewed_by: &str,
    status: &str,
    action: &str,
    token: &str,
) -> Result<ModerationQueueItem, String> {
    let path = format!(
        "/moderation-queue/{id}/review?reviewedBy={}&status={status}&action={action}",
        urlencoding::encode(reviewed_by)
    );
    patch_json(&path, token).await
}

pub async fn delete_moderation_item(id: &str, token: &str) -> Result<(), String> {
    delete(&format!("/moderation-queue/{id}"), token).await
}

pub async fn moderation_actions(token: &str) -> Result<Vec<ModerationAction>, String> {
    get_json("/moderation-actions", Some(token)).await
}

pub async fn reports(token: &str) -> Result<Vec<Report>, String> {
    get_json("/reports", Some(token)).await
}

pub async fn bans(token: &str) -> Result<Vec<Ban>, String> {
    get_json("/bans", Some(token)).await
}

pub async fn create_ban(payload: &BanCreate, token: &str) -> Result<Ban, String> {
    post_json("/bans", payload, Some(token)).await
}

// ---- Channels ----

pub async fn channels(page: u32, size: u32) -> Result<Vec<Channel>, String> {
    get_json(&format!("/channels?page={page}&size={size}"), None).await
}

pub async fn channels_by_creator(username: &str, token: &str) -> Result<Vec<Channel>, String> {
    get_json(&format!("/channels/created-by/{username}"), Some(token)).await
}

pub async fn channel_subscribers(channel_id: i64, token: &str) -> Result<Vec<Subscription>, String> {
    get_json(&format!("/subscriptions/channel/{channel_id}"), Some(token)).await
}

/// Remove a user's channel enrollment; the response body is ignored.
pub async fn unsubscribe_user(user_id: i64, channel_id: i64, token: &str) -> Result<(), String> {
    delete(
        &format!("/subscriptions/unsubscribe?userId={user_id}&channelId={channel_id}"),
        token,
    )
    .await
}

// ---- Users & universities ----

pub async fn user_by_id(user_id: i64, token: &str) -> Result<UserProfile, String> {
    get_json(&format!("/users/{user_id}"), Some(token)).await
}

pub async fn universities() -> Result<Vec<University>, String> {
    get_json("/universities", None).await
}

// ---- Search ----

pub async fn search_posts(query: &str, limit: u32) -> Result<Vec<PostResult>, String> {
    let path = format!("/search/posts?q={}&limit={limit}", urlencoding::encode(query));
    get_json(&path, None).await
}

// ---- Analytics ----

pub async fn analytics_by_user(user_id: i64, token: &str) -> Result<Vec<AnalyticsEvent>, String> {
    get_json(&format!("/analytics/events/user/{user_id}"), Some(token)).await
}

pub async fn analytics_by_university(
    university_id: i64,
    token: &str,
) -> Result<Vec<AnalyticsEvent>, String> {
    get_json(&format!("/analytics/events/university/{university_id}"), Some(token)).await
}

pub async fn analytics_by_channel(
    channel_id: i64,
    token: &str,
) -> Result<Vec<AnalyticsEvent>, String> {
    get_json(&format!("/analytics/events/channel/{channel_id}"), Some(token)).await
}

pub async fn trending_by_university(university_id: i64) -> Result<Vec<TrendingCache>, String> {
    get_json(&format!("/trending/university/{university_id}"), None).await
}

// ---- Preferences ----

pub async fn user_preferences(username: &str, token: &str) -> Result<UserPreference, String> {
    get_json(&format!("/user-preferences/{username}"), Some(token)).await
}

pub async fn upsert_user_preferences(
    payload: &UserPreference,
    token: &str,
) -> Result<UserPreference, String> {
    post_json("/user-preferences", payload, Some(token)).await
}
