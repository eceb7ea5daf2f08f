//! Wire types and pure domain logic for the Jiu-Jitsu Exchange web client.
//!
//! Everything in this crate is DOM-free and host-testable: the serde models
//! for the backend's JSON bodies, the error-message extraction used by the
//! API clients, form/file validation, and the schedule math the dashboard
//! renders from.

use serde::{Deserialize, Serialize};

pub mod api;
pub mod fmt;
pub mod schedule;
pub mod validate;

// =========================================================
// Identity
// =========================================================

/// The authenticated user's minimal profile as known to the client.
///
/// Created by a successful login/register/session-probe response and held
/// in memory for the tab's lifetime; a page reload re-runs the probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

// =========================================================
// Auth bodies
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Success body of `POST /api/login` and `POST /api/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: User,
}

/// Success body of the session probe (`GET /api/user`).
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub user: User,
}

/// Failure body shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// =========================================================
// Membership bodies
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipPlan {
    pub id: String,
    pub name: String,
    /// Price in minor units (cents).
    pub price: i64,
    pub currency: String,
    /// Billing interval as reported by the payment backend, e.g. `"month"`.
    pub interval: String,
}

/// Read-only snapshot; the single source of truth for the entitlement gate.
///
/// `has_membership == false` means the paywall renders regardless of the
/// other fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MembershipStatus {
    pub has_membership: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_period_end: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeConfig {
    pub publishable_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MembershipPlansResponse {
    pub plans: Vec<MembershipPlan>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSessionResponse {
    pub checkout_url: String,
}

/// Plain acknowledgement body (`cancel`, `verify-payment`, avatar delete).
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Success body of the avatar upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub profile_picture: String,
}

// =========================================================
// Schedule
// =========================================================

/// One slot of the weekly timetable.
///
/// `enrolled <= capacity` is expected but not enforced here; the backend is
/// authoritative. Items are replaced wholesale on each schedule load and
/// mutated optimistically on enroll/unenroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScheduleItem {
    pub id: String,
    pub day: schedule::Weekday,
    /// Display time range, e.g. `"6:00 PM - 7:30 PM"`.
    pub time: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    pub capacity: u32,
    pub enrolled: u32,
    pub is_enrolled: bool,
}

/// Plans shown on the paywall: only monthly billing is offered there.
pub fn monthly_plans(plans: &[MembershipPlan]) -> Vec<MembershipPlan> {
    plans
        .iter()
        .filter(|p| p.interval == "month")
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests;
