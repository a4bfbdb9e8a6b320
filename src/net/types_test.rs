use super::*;

#[test]
fn auth_response_accepts_minimal_payload() {
    let parsed: AuthResponse = serde_json::from_str(r#"{"accessToken":"tok-1"}"#).unwrap();
    assert_eq!(parsed.access_token, "tok-1");
    assert!(parsed.refresh_token.is_none());
    assert!(parsed.user.is_none());
}

#[test]
fn auth_response_parses_inline_user() {
    let raw = r#"{
        "accessToken": "tok-2",
        "refreshToken": "ref-2",
        "user": {"id": 7, "username": "casey", "email": "casey@uni.edu"}
    }"#;
    let parsed: AuthResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.refresh_token.as_deref(), Some("ref-2"));
    let user = parsed.user.unwrap();
    assert_eq!(user.id, 7);
    assert!(user.university_id.is_none());
    assert!(user.verification_status.is_none());
}

#[test]
fn badge_uses_camel_case_keys() {
    let raw = r#"{"id":1,"userId":7,"badgeType":"MODERATOR","channelId":3}"#;
    let badge: Badge = serde_json::from_str(raw).unwrap();
    assert_eq!(badge.user_id, 7);
    assert_eq!(badge.badge_type, "MODERATOR");
    assert_eq!(badge.channel_id, Some(3));
    assert!(badge.earned_at.is_none());
}

#[test]
fn notification_maps_type_field() {
    let raw = r#"{"id":"n1","type":"REPLY","title":"New reply","message":"..."}"#;
    let note: Notification = serde_json::from_str(raw).unwrap();
    assert_eq!(note.kind, "REPLY");
    assert!(note.is_read.is_none());
}

#[test]
fn moderation_queue_item_accepts_legacy_fields() {
    let raw = r#"{"id":"q1","reason":"spam","score":0.8,"status":"OPEN"}"#;
    let item: ModerationQueueItem = serde_json::from_str(raw).unwrap();
    assert_eq!(item.reason.as_deref(), Some("spam"));
    assert_eq!(item.score, Some(0.8));
    assert!(item.ai_flags.is_none());
}

#[test]
fn register_payload_omits_absent_options() {
    let payload = RegisterPayload {
        username: "casey".to_owned(),
        email: "casey@uni.edu".to_owned(),
        password: "hunter2".to_owned(),
        university_id: None,
        real_name: None,
    };
    let raw = serde_json::to_string(&payload).unwrap();
    assert!(!raw.contains("universityId"));
    assert!(!raw.contains("realName"));
}

#[test]
fn ban_create_keeps_explicit_nulls_for_duration() {
    let payload = BanCreate {
        user_id: 9,
        banned_by: Some(1),
        reason: Some("policy".to_owned()),
        duration: None,
        expires_at: None,
        created_at: None,
    };
    let value = serde_json::to_value(&payload).unwrap();
    // The server distinguishes "permanent" by explicit null duration/expiry.
    assert!(value.get("duration").unwrap().is_null());
    assert!(value.get("expiresAt").unwrap().is_null());
    assert!(value.get("createdAt").is_none());
}

#[test]
fn karma_parses_per_channel_map() {
    let raw = r#"{
        "id":1,"userId":7,"karmaScore":120,"postKarma":90,"commentKarma":30,
        "karmaByChannel":{"4":55,"9":65}
    }"#;
    let karma: Karma = serde_json::from_str(raw).unwrap();
    let by_channel = karma.karma_by_channel.unwrap();
    assert_eq!(by_channel.get("4"), Some(&55));
    assert_eq!(by_channel.get("9"), Some(&65));
}
