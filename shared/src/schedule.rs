//! Weekly schedule logic: day grouping, slot action derivation, the
//! optimistic enrollment toggle, and the display-only week range.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ClassScheduleItem;

// =========================================================
// Weekday
// =========================================================

/// Day of the week in the timetable's fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Display order of the schedule: Monday first, Sunday last.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

// =========================================================
// Grouping
// =========================================================

/// Group timetable items by weekday, Monday through Sunday.
///
/// Days with zero classes are omitted entirely. Within a day, items keep the
/// order they were returned in.
pub fn group_by_day(items: &[ClassScheduleItem]) -> Vec<(Weekday, Vec<ClassScheduleItem>)> {
    Weekday::ALL
        .into_iter()
        .filter_map(|day| {
            let classes: Vec<_> = items.iter().filter(|c| c.day == day).cloned().collect();
            if classes.is_empty() { None } else { Some((day, classes)) }
        })
        .collect()
}

// =========================================================
// Slot actions
// =========================================================

/// The single action a schedule slot offers, derived from its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotAction {
    /// Not enrolled, seats available.
    SignUp,
    /// Not enrolled, at or past capacity; control is disabled.
    Full,
    /// Enrolled; always offered.
    Drop,
}

impl SlotAction {
    pub fn label(&self) -> &'static str {
        match self {
            SlotAction::SignUp => "Sign Up",
            SlotAction::Full => "Full",
            SlotAction::Drop => "Drop",
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, SlotAction::Full)
    }
}

pub fn slot_action(item: &ClassScheduleItem) -> SlotAction {
    if item.is_enrolled {
        SlotAction::Drop
    } else if item.enrolled < item.capacity {
        SlotAction::SignUp
    } else {
        SlotAction::Full
    }
}

/// Optimistic enrollment toggle: flip `is_enrolled` and move `enrolled` by
/// exactly one. No reconciliation against a server-authoritative count.
pub fn apply_toggle(item: &mut ClassScheduleItem) {
    if item.is_enrolled {
        item.is_enrolled = false;
        item.enrolled = item.enrolled.saturating_sub(1);
    } else {
        item.is_enrolled = true;
        item.enrolled += 1;
    }
}

// =========================================================
// Week range (presentation only)
// =========================================================

/// The current calendar week's Monday..Sunday range.
///
/// Monday is `today - ((weekday + 6) % 7)` with the weekday counted
/// Sunday = 0. Display only; does not filter which classes load.
pub fn week_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let back = (today.weekday().num_days_from_sunday() + 6) % 7;
    let monday = today - Days::new(back as u64);
    let sunday = monday + Days::new(6);
    (monday, sunday)
}

/// Format a week range for the schedule heading, e.g.
/// `"June 2 - June 8, 2025"`.
pub fn format_week_range(monday: NaiveDate, sunday: NaiveDate) -> String {
    format!(
        "{} - {}",
        monday.format("%B %-d"),
        sunday.format("%B %-d, %Y")
    )
}

#[cfg(test)]
mod tests;
