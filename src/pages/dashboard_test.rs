use super::*;
use std::collections::HashMap;

fn event(kind: &str, timestamp: Option<&str>) -> AnalyticsEvent {
    AnalyticsEvent {
        id: "e1".to_owned(),
        event_type: kind.to_owned(),
        event_category: None,
        user_id: Some(1),
        username: None,
        channel_id: None,
        university_id: None,
        content_id: None,
        content_type: None,
        timestamp: timestamp.map(str::to_owned),
    }
}

fn channel(id: i64, name: &str) -> Channel {
    Channel {
        id,
        name: name.to_owned(),
        description: None,
        university_id: None,
        university_name: None,
        category: None,
        subscriber_count: None,
    }
}

// ============================================================================
// engagement_trend
// ============================================================================

#[test]
fn trend_always_has_seven_monday_first_rows() {
    let rows = engagement_trend(&[]);
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0].day, "Mon");
    assert_eq!(rows[6].day, "Sun");
    assert!(rows.iter().all(|r| r.views == 0 && r.engagement == 0));
}

#[test]
fn events_land_in_their_weekday_bucket() {
    // 2026-08-23 is a Sunday, 2026-08-18 a Tuesday.
    let events = [
        event("POST_VIEW", Some("2026-08-23T10:00:00Z")),
        event("UPVOTE", Some("2026-08-23T11:00:00Z")),
        event("COMMENT_CREATE", Some("2026-08-18T09:00:00Z")),
        event("SHARE", Some("2026-08-18T09:30:00Z")),
        event("NAVIGATION", Some("2026-08-18T09:45:00Z")),
    ];
    let rows = engagement_trend(&events);
    assert_eq!(rows[6].views, 1);
    assert_eq!(rows[6].engagement, 1);
    assert_eq!(rows[1].engagement, 2);
    assert_eq!(rows[1].views, 0);
}

#[test]
fn events_without_timestamps_are_skipped() {
    let events = [event("POST_VIEW", None), event("UPVOTE", Some("not a date"))];
    let rows = engagement_trend(&events);
    assert_eq!(weekly_engagement(&rows), 0);
    assert!(rows.iter().all(|r| r.views == 0));
}

#[test]
fn weekly_engagement_sums_all_buckets() {
    let events = [
        event("UPVOTE", Some("2026-08-17T08:00:00Z")),
        event("SHARE", Some("2026-08-20T08:00:00Z")),
        event("COMMENT_CREATE", Some("2026-08-22T08:00:00Z")),
    ];
    assert_eq!(weekly_engagement(&engagement_trend(&events)), 3);
}

// ============================================================================
// karma_by_topic
// ============================================================================

#[test]
fn karma_bars_resolve_channel_names() {
    let karma = Karma {
        id: 1,
        user_id: 1,
        karma_score: 30,
        post_karma: 20,
        comment_karma: 10,
        karma_by_channel: Some(HashMap::from([
            ("3".to_owned(), 12),
            ("9".to_owned(), 18),
        ])),
        updated_at: None,
    };
    let channels = [channel(3, "CS Hub")];
    let data = karma_by_topic(Some(&karma), &channels);
    assert_eq!(data.len(), 2);
    assert!(data.iter().any(|d| d.label == "CS Hub" && (d.value - 12.0).abs() < 1e-9));
    assert!(data.iter().any(|d| d.label == "Channel 9" && (d.value - 18.0).abs() < 1e-9));
}

#[test]
fn missing_karma_yields_no_bars() {
    assert!(karma_by_topic(None, &[]).is_empty());
    let karma = Karma {
        id: 1,
        user_id: 1,
        karma_score: 0,
        post_karma: 0,
        comment_karma: 0,
        karma_by_channel: None,
        updated_at: None,
    };
    assert!(karma_by_topic(Some(&karma), &[]).is_empty());
}

// ============================================================================
// notification_title
// ============================================================================

#[test]
fn notification_title_falls_back_to_message() {
    let mut note = Notification {
        id: "n1".to_owned(),
        kind: "REPLY".to_owned(),
        title: "New reply".to_owned(),
        message: "Someone replied".to_owned(),
        is_read: None,
        created_at: None,
    };
    assert_eq!(notification_title(&note), "New reply");
    note.title.clear();
    assert_eq!(notification_title(&note), "Someone replied");
    note.message.clear();
    assert_eq!(notification_title(&note), "Notification");
}
