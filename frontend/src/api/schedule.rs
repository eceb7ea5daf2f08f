//! Schedule data access.
//!
//! There is no real schedule backend yet; the dashboard talks to a
//! `ScheduleApi` capability so the simulation below can be swapped for a
//! real client (or a deterministic test double) without touching the view.

use std::sync::Arc;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use jjx_shared::{ClassScheduleItem, schedule::Weekday};

#[async_trait(?Send)]
pub trait ScheduleApi {
    /// Replace-wholesale load of the weekly timetable.
    async fn load_schedule(&self) -> Result<Vec<ClassScheduleItem>, String>;

    /// Enroll in (`true`) or drop (`false`) a class. The caller applies the
    /// optimistic local mutation after this resolves.
    async fn set_enrollment(&self, class_id: &str, enroll: bool) -> Result<(), String>;
}

pub type SharedScheduleApi = Arc<dyn ScheduleApi + Send + Sync>;

/// Fixed-delay stand-in for the future schedule backend.
///
/// Answers from a fixed in-memory timetable; enrollment changes are
/// fire-and-forget. This is a placeholder, not a contract: a real backend
/// means a round trip with rollback on failure.
pub struct SimulatedSchedule;

#[async_trait(?Send)]
impl ScheduleApi for SimulatedSchedule {
    async fn load_schedule(&self) -> Result<Vec<ClassScheduleItem>, String> {
        TimeoutFuture::new(1_000).await;
        Ok(weekly_timetable())
    }

    async fn set_enrollment(&self, _class_id: &str, _enroll: bool) -> Result<(), String> {
        TimeoutFuture::new(500).await;
        Ok(())
    }
}

fn class(
    id: &str,
    day: Weekday,
    time: &str,
    name: &str,
    instructor: Option<&str>,
    capacity: u32,
    enrolled: u32,
    is_enrolled: bool,
) -> ClassScheduleItem {
    ClassScheduleItem {
        id: id.to_string(),
        day,
        time: time.to_string(),
        name: name.to_string(),
        instructor: instructor.map(str::to_string),
        capacity,
        enrolled,
        is_enrolled,
    }
}

/// The gym's current weekly timetable, Monday through Saturday.
fn weekly_timetable() -> Vec<ClassScheduleItem> {
    vec![
        class(
            "mon-fundamentals",
            Weekday::Monday,
            "6:00 AM - 7:00 AM",
            "Fundamentals",
            Some("Coach Maya"),
            20,
            12,
            false,
        ),
        class(
            "mon-nogi",
            Weekday::Monday,
            "6:00 PM - 7:30 PM",
            "No Gi Jiu-Jitsu",
            Some("Coach Reginald"),
            24,
            18,
            true,
        ),
        class(
            "tue-gi",
            Weekday::Tuesday,
            "12:00 PM - 1:00 PM",
            "Gi Jiu-Jitsu",
            Some("Coach Maya"),
            20,
            9,
            false,
        ),
        class(
            "tue-sparring",
            Weekday::Tuesday,
            "7:30 PM - 9:00 PM",
            "Open Sparring",
            None,
            30,
            21,
            false,
        ),
        class(
            "wed-nogi",
            Weekday::Wednesday,
            "6:00 PM - 7:30 PM",
            "No Gi Jiu-Jitsu",
            Some("Coach Reginald"),
            24,
            16,
            false,
        ),
        class(
            "thu-gi",
            Weekday::Thursday,
            "6:00 PM - 7:30 PM",
            "Gi Jiu-Jitsu",
            Some("Coach Reginald"),
            20,
            14,
            true,
        ),
        class(
            "thu-comp",
            Weekday::Thursday,
            "7:30 PM - 9:00 PM",
            "Competition Training",
            Some("Coach Dara"),
            16,
            11,
            false,
        ),
        class(
            "fri-fundamentals",
            Weekday::Friday,
            "5:30 PM - 6:30 PM",
            "Fundamentals",
            Some("Coach Maya"),
            20,
            8,
            false,
        ),
        class(
            "fri-sparring",
            Weekday::Friday,
            "6:30 PM - 8:00 PM",
            "Open Sparring",
            None,
            30,
            19,
            false,
        ),
        class(
            "sat-kids",
            Weekday::Saturday,
            "9:00 AM - 10:00 AM",
            "Kids Jiu-Jitsu",
            Some("Coach Dara"),
            15,
            10,
            false,
        ),
        class(
            "sat-openmat",
            Weekday::Saturday,
            "10:00 AM - 12:00 PM",
            "Open Mat",
            None,
            40,
            22,
            false,
        ),
    ]
}
