//! API-facing helpers shared by the typed fetch clients.
//!
//! The clients themselves live in the frontend crate (they need the browser
//! fetch API); the response-interpretation rules live here so they can be
//! tested off the browser.

use crate::ErrorResponse;

/// Same-origin prefix for every backend call.
pub const API_BASE: &str = "/api";

/// Message substituted by the credential forms when the transport itself
/// fails or a body cannot be parsed at all.
pub const NETWORK_ERROR: &str = "Network error. Please try again.";

/// Extract the user-facing message from a non-success response body.
///
/// Returns the body's `error` field when present and non-empty; any other
/// shape (missing field, empty string, unparsable body) collapses to the
/// operation's fixed fallback.
pub fn api_error_message(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse { error }) if !error.is_empty() => error,
        _ => fallback.to_string(),
    }
}

/// Map a stored avatar reference to its fetchable URL.
///
/// Pure: never performs I/O. `None` (or an empty reference) yields `None`.
pub fn profile_picture_url(reference: Option<&str>) -> Option<String> {
    reference
        .filter(|r| !r.is_empty())
        .map(|r| format!("{API_BASE}/profile-picture/{r}"))
}

#[cfg(test)]
mod tests;
