use super::*;

fn plan(id: &str, interval: &str) -> MembershipPlan {
    MembershipPlan {
        id: id.to_string(),
        name: "Monthly Membership".to_string(),
        price: 2999,
        currency: "usd".to_string(),
        interval: interval.to_string(),
    }
}

#[test]
fn paywall_lists_only_monthly_plans() {
    let plans = vec![plan("m", "month"), plan("y", "year"), plan("w", "week")];
    let monthly = monthly_plans(&plans);
    assert_eq!(monthly.len(), 1);
    assert_eq!(monthly[0].id, "m");
}

#[test]
fn no_membership_means_paywall_regardless_of_other_fields() {
    // A stale plan_type must not grant entitlement.
    let status: MembershipStatus = serde_json::from_str(
        r#"{"has_membership":false,"plan_type":"monthly","status":"canceled"}"#,
    )
    .unwrap();
    assert!(!status.has_membership);
    assert_eq!(status.plan_type.as_deref(), Some("monthly"));
}

#[test]
fn membership_status_tolerates_minimal_body() {
    let status: MembershipStatus = serde_json::from_str(r#"{"has_membership":true}"#).unwrap();
    assert!(status.has_membership);
    assert!(status.plan_type.is_none());
    assert!(status.current_period_end.is_none());
}

#[test]
fn user_profile_picture_is_optional() {
    let user: User =
        serde_json::from_str(r#"{"id":1,"username":"alice","email":"a@x.com"}"#).unwrap();
    assert_eq!(user.username, "alice");
    assert!(user.profile_picture.is_none());
}

#[test]
fn auth_response_parses_login_body() {
    let body = r#"{"message":"ok","user":{"id":1,"username":"alice","email":"a@x.com"}}"#;
    let resp: AuthResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.user.id, 1);
    assert_eq!(resp.user.email, "a@x.com");
}

#[test]
fn plans_response_parses_wrapper() {
    let body = r#"{"plans":[{"id":"plan_123","name":"Monthly Membership","price":2999,"currency":"usd","interval":"month"}]}"#;
    let resp: MembershipPlansResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.plans.len(), 1);
    assert_eq!(resp.plans[0].price, 2999);
}

#[test]
fn schedule_item_round_trips() {
    let item = ClassScheduleItem {
        id: "mon-nogi".to_string(),
        day: schedule::Weekday::Monday,
        time: "6:00 PM - 7:30 PM".to_string(),
        name: "No Gi Jiu-Jitsu".to_string(),
        instructor: None,
        capacity: 24,
        enrolled: 18,
        is_enrolled: true,
    };
    let json = serde_json::to_string(&item).unwrap();
    assert!(json.contains(r#""day":"monday""#));
    let back: ClassScheduleItem = serde_json::from_str(&json).unwrap();
    assert_eq!(back, item);
}
