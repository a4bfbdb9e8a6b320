use super::*;

fn event(kind: &str, content_id: Option<i64>, channel_id: Option<i64>, timestamp: Option<&str>) -> AnalyticsEvent {
    AnalyticsEvent {
        id: "e1".to_owned(),
        event_type: kind.to_owned(),
        event_category: None,
        user_id: None,
        username: None,
        channel_id,
        university_id: None,
        content_id,
        content_type: None,
        timestamp: timestamp.map(str::to_owned),
    }
}

fn channel(id: i64, name: &str, subscribers: Option<i64>) -> Channel {
    Channel {
        id,
        name: name.to_owned(),
        description: None,
        university_id: None,
        university_name: None,
        category: None,
        subscriber_count: subscribers,
    }
}

// ============================================================================
// growth_trend
// ============================================================================

#[test]
fn events_bucket_by_week_of_month() {
    let events = [
        event("JOIN", None, None, Some("2026-08-03T10:00:00Z")),
        event("JOIN", None, None, Some("2026-08-10T10:00:00Z")),
        event("JOIN", None, None, Some("2026-08-12T10:00:00Z")),
        event("JOIN", None, None, Some("2026-08-31T10:00:00Z")),
    ];
    let weeks = growth_trend(&events);
    assert_eq!(weeks, [1, 2, 0, 0, 1]);
}

#[test]
fn day_twenty_eight_and_later_fold_into_the_last_week() {
    let events = [
        event("JOIN", None, None, Some("2026-08-28T10:00:00Z")),
        event("JOIN", None, None, Some("2026-08-29T10:00:00Z")),
    ];
    assert_eq!(growth_trend(&events)[4], 2);
}

#[test]
fn undated_events_are_ignored() {
    assert_eq!(growth_trend(&[event("JOIN", None, None, None)]), [0; 5]);
}

// ============================================================================
// active_users
// ============================================================================

#[test]
fn active_users_takes_the_first_four_channels() {
    let channels: Vec<Channel> = (0..6).map(|i| channel(i, &format!("c{i}"), Some(i * 10))).collect();
    let data = active_users(&channels);
    assert_eq!(data.len(), 4);
    assert_eq!(data[2].label, "c2");
    assert!((data[2].value - 20.0).abs() < 1e-9);
}

#[test]
fn missing_subscriber_counts_read_as_zero() {
    let data = active_users(&[channel(1, "c1", None)]);
    assert_eq!(data[0].value, 0.0);
}

// ============================================================================
// popular_posts
// ============================================================================

#[test]
fn view_events_become_popular_posts() {
    let events = [
        event("POST_VIEW", Some(42), Some(7), None),
        event("UPVOTE", Some(43), Some(7), None),
        event("POST_VIEW", None, Some(7), None),
    ];
    let channels = [channel(7, "CS Hub", None)];
    let posts = popular_posts(&events, &channels);
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "Post 42");
    assert_eq!(posts[0].channel, "CS Hub");
}

#[test]
fn no_view_events_fall_back_to_the_showcase_list() {
    let posts = popular_posts(&[], &[]);
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].channel, "Careers");
}
