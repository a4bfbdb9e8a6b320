use super::*;

#[test]
fn endpoint_prefixes_api_mount() {
    assert_eq!(endpoint("/auth/me"), "/api/auth/me");
    assert_eq!(endpoint("/badges/user/7"), "/api/badges/user/7");
}

#[test]
fn error_message_prefers_body_error_field() {
    let body = serde_json::json!({ "error": "Invalid credentials" });
    assert_eq!(error_message(401, "Unauthorized", Some(&body)), "Invalid credentials");
}

#[test]
fn error_message_falls_back_to_status_text() {
    let body = serde_json::json!({ "detail": "something else" });
    assert_eq!(error_message(503, "Service Unavailable", Some(&body)), "Service Unavailable");
    assert_eq!(error_message(500, "Internal Server Error", None), "Internal Server Error");
}

#[test]
fn error_message_without_status_text_names_the_code() {
    assert_eq!(error_message(502, "", None), "request failed: 502");
}

#[test]
fn error_message_ignores_non_string_error_field() {
    let body = serde_json::json!({ "error": { "code": 42 } });
    assert_eq!(error_message(400, "Bad Request", Some(&body)), "Bad Request");
}

// Off the browser, every wrapper resolves to the same unavailable error
// instead of attempting a network call.
#[test]
fn moderation_wrappers_share_the_offline_contract() {
    use futures::executor::block_on;

    let err = block_on(moderation_queue_by_status("PENDING", "tok")).unwrap_err();
    assert_eq!(err, NOT_AVAILABLE);
    let err = block_on(delete_moderation_item("42", "tok")).unwrap_err();
    assert_eq!(err, NOT_AVAILABLE);
}
