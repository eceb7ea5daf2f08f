use super::*;

// =========================================================
// api_error_message
// =========================================================

#[test]
fn error_field_wins_over_fallback() {
    let body = r#"{"error":"Invalid username or password"}"#;
    assert_eq!(
        api_error_message(body, "Login failed"),
        "Invalid username or password"
    );
}

#[test]
fn missing_error_field_uses_fallback() {
    assert_eq!(
        api_error_message(r#"{"message":"nope"}"#, "Request failed"),
        "Request failed"
    );
}

#[test]
fn empty_error_field_uses_fallback() {
    assert_eq!(
        api_error_message(r#"{"error":""}"#, "Failed to cancel membership"),
        "Failed to cancel membership"
    );
}

#[test]
fn unparsable_body_uses_fallback() {
    assert_eq!(
        api_error_message("<html>502 Bad Gateway</html>", "Failed to get membership plans"),
        "Failed to get membership plans"
    );
    assert_eq!(api_error_message("", "Failed to verify payment"), "Failed to verify payment");
}

#[test]
fn non_string_error_field_uses_fallback() {
    assert_eq!(
        api_error_message(r#"{"error":42}"#, "Failed to get Stripe configuration"),
        "Failed to get Stripe configuration"
    );
}

// =========================================================
// profile_picture_url
// =========================================================

#[test]
fn maps_reference_to_fetch_url() {
    assert_eq!(
        profile_picture_url(Some("abc123.png")).as_deref(),
        Some("/api/profile-picture/abc123.png")
    );
}

#[test]
fn no_reference_yields_none() {
    assert_eq!(profile_picture_url(None), None);
    assert_eq!(profile_picture_url(Some("")), None);
}
