use super::*;

// ============================================================================
// query parsing
// ============================================================================

#[test]
fn mode_defaults_to_login() {
    assert_eq!(mode_from_search(""), AuthMode::Login);
    assert_eq!(mode_from_search("?mode=banana"), AuthMode::Login);
    assert_eq!(mode_from_search("?mode=register"), AuthMode::Register);
    assert_eq!(mode_from_search("mode=register&from=%2Fprofile"), AuthMode::Register);
}

#[test]
fn redirect_target_decodes_the_from_param() {
    assert_eq!(redirect_target("?from=%2Fmoderation"), "/moderation");
    assert_eq!(redirect_target("?mode=login&from=%2Fchannel-badges"), "/channel-badges");
}

#[test]
fn redirect_target_rejects_offsite_and_missing_paths() {
    assert_eq!(redirect_target(""), "/dashboard");
    assert_eq!(redirect_target("?from=https%3A%2F%2Fevil.test"), "/dashboard");
    assert_eq!(redirect_target("?from=%2F%2Fevil.test"), "/dashboard");
}

// ============================================================================
// registration payload
// ============================================================================

#[test]
fn register_payload_fills_every_wire_field() {
    let payload = register_payload(" casey ", " casey@uni.edu ", "", "hunter2".to_owned());
    assert_eq!(payload.username, "casey");
    assert_eq!(payload.email, "casey@uni.edu");
    assert_eq!(payload.password, "hunter2");
    assert_eq!(payload.university_id, None);
    assert_eq!(payload.real_name, None);
}

#[test]
fn register_payload_keeps_a_nonempty_real_name() {
    let payload =
        register_payload("casey", "casey@uni.edu", " Casey Price ", "hunter2".to_owned());
    assert_eq!(payload.real_name.as_deref(), Some("Casey Price"));
}

// ============================================================================
// validation
// ============================================================================

#[test]
fn login_requires_identifier_and_password() {
    assert_eq!(
        validation_error(AuthMode::Login, "", "", "", "pw"),
        Some("Enter your username or email.")
    );
    assert_eq!(
        validation_error(AuthMode::Login, "casey", "", "", "  "),
        Some("Password is required.")
    );
    assert_eq!(validation_error(AuthMode::Login, "casey", "", "", "pw"), None);
}

#[test]
fn register_requires_username_and_email() {
    assert_eq!(
        validation_error(AuthMode::Register, "", "", "c@uni.edu", "pw"),
        Some("Username is required.")
    );
    assert_eq!(
        validation_error(AuthMode::Register, "", "casey", " ", "pw"),
        Some("University email is required.")
    );
    assert_eq!(validation_error(AuthMode::Register, "", "casey", "c@uni.edu", "pw"), None);
}
