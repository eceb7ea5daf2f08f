use super::*;

fn item(id: &str, day: Weekday, enrolled: u32, capacity: u32, is_enrolled: bool) -> ClassScheduleItem {
    ClassScheduleItem {
        id: id.to_string(),
        day,
        time: "6:00 PM - 7:30 PM".to_string(),
        name: "No Gi Jiu-Jitsu".to_string(),
        instructor: Some("Coach Reginald".to_string()),
        capacity,
        enrolled,
        is_enrolled,
    }
}

// =========================================================
// Grouping
// =========================================================

#[test]
fn days_render_monday_through_sunday() {
    // Feed items in scrambled order across all seven days.
    let items = vec![
        item("f", Weekday::Friday, 1, 10, false),
        item("su", Weekday::Sunday, 1, 10, false),
        item("w", Weekday::Wednesday, 1, 10, false),
        item("m", Weekday::Monday, 1, 10, false),
        item("sa", Weekday::Saturday, 1, 10, false),
        item("tu", Weekday::Tuesday, 1, 10, false),
        item("th", Weekday::Thursday, 1, 10, false),
    ];
    let days: Vec<_> = group_by_day(&items).into_iter().map(|(d, _)| d).collect();
    assert_eq!(
        days,
        vec![
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]
    );
}

#[test]
fn empty_days_are_omitted() {
    let items = vec![
        item("m", Weekday::Monday, 1, 10, false),
        item("sa", Weekday::Saturday, 1, 10, false),
    ];
    let days: Vec<_> = group_by_day(&items).into_iter().map(|(d, _)| d).collect();
    assert_eq!(days, vec![Weekday::Monday, Weekday::Saturday]);
}

#[test]
fn within_day_order_is_preserved() {
    let mut first = item("a", Weekday::Monday, 1, 10, false);
    first.name = "Fundamentals".to_string();
    let second = item("b", Weekday::Monday, 1, 10, false);
    let groups = group_by_day(&[first, second]);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].1[0].id, "a");
    assert_eq!(groups[0].1[1].id, "b");
}

#[test]
fn no_items_means_no_groups() {
    assert!(group_by_day(&[]).is_empty());
}

// =========================================================
// Slot actions
// =========================================================

#[test]
fn enrolled_slot_offers_drop() {
    let action = slot_action(&item("a", Weekday::Monday, 5, 10, true));
    assert_eq!(action, SlotAction::Drop);
    assert_eq!(action.label(), "Drop");
    assert!(action.is_enabled());
}

#[test]
fn open_slot_offers_sign_up() {
    let action = slot_action(&item("a", Weekday::Monday, 9, 10, false));
    assert_eq!(action, SlotAction::SignUp);
    assert_eq!(action.label(), "Sign Up");
    assert!(action.is_enabled());
}

#[test]
fn full_slot_is_disabled() {
    let action = slot_action(&item("a", Weekday::Monday, 10, 10, false));
    assert_eq!(action, SlotAction::Full);
    assert_eq!(action.label(), "Full");
    assert!(!action.is_enabled());
}

#[test]
fn enrolled_wins_even_at_capacity() {
    // A member already in a full class can still drop it.
    assert_eq!(slot_action(&item("a", Weekday::Monday, 10, 10, true)), SlotAction::Drop);
}

// =========================================================
// Optimistic toggle
// =========================================================

#[test]
fn sign_up_increments_by_exactly_one() {
    let mut slot = item("a", Weekday::Monday, 7, 10, false);
    apply_toggle(&mut slot);
    assert!(slot.is_enrolled);
    assert_eq!(slot.enrolled, 8);
    assert_eq!(slot_action(&slot), SlotAction::Drop);
}

#[test]
fn drop_decrements_by_exactly_one() {
    let mut slot = item("a", Weekday::Monday, 8, 10, true);
    apply_toggle(&mut slot);
    assert!(!slot.is_enrolled);
    assert_eq!(slot.enrolled, 7);
    assert_eq!(slot_action(&slot), SlotAction::SignUp);
}

#[test]
fn dropping_a_full_class_reopens_it() {
    // The reported count included our seat, so dropping frees one slot.
    let mut slot = item("a", Weekday::Monday, 10, 10, true);
    apply_toggle(&mut slot);
    assert_eq!(slot.enrolled, 9);
    assert_eq!(slot_action(&slot), SlotAction::SignUp);
}

#[test]
fn toggle_round_trip_restores_count() {
    let mut slot = item("a", Weekday::Monday, 4, 10, false);
    apply_toggle(&mut slot);
    apply_toggle(&mut slot);
    assert_eq!(slot.enrolled, 4);
    assert!(!slot.is_enrolled);
}

// =========================================================
// Week range
// =========================================================

#[test]
fn monday_maps_to_itself() {
    let monday = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    let (start, end) = week_range(monday);
    assert_eq!(start, monday);
    assert_eq!(end, NaiveDate::from_ymd_opt(2025, 6, 8).unwrap());
}

#[test]
fn sunday_maps_to_previous_monday() {
    // Sunday counts as the last day of the week, not the first.
    let sunday = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
    let (start, end) = week_range(sunday);
    assert_eq!(start, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
    assert_eq!(end, sunday);
}

#[test]
fn midweek_maps_back_to_monday() {
    let thursday = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
    let (start, _) = week_range(thursday);
    assert_eq!(start, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
}

#[test]
fn range_formats_for_display() {
    let (start, end) = week_range(NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
    assert_eq!(format_week_range(start, end), "June 2 - June 8, 2025");
}

#[test]
fn range_spanning_a_month_boundary() {
    let (start, end) = week_range(NaiveDate::from_ymd_opt(2025, 7, 2).unwrap());
    assert_eq!(format_week_range(start, end), "June 30 - July 6, 2025");
}
