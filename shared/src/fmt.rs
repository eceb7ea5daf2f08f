//! Display formatting for prices and billing dates.

use chrono::DateTime;

/// Format a minor-unit price for display, e.g. `(2999, "usd")` -> `"$29.99"`.
///
/// Non-USD currencies fall back to an explicit currency code suffix.
pub fn format_price(minor_units: i64, currency: &str) -> String {
    let whole = minor_units / 100;
    let cents = (minor_units % 100).abs();
    if currency.eq_ignore_ascii_case("usd") {
        format!("${whole}.{cents:02}")
    } else {
        format!("{whole}.{cents:02} {}", currency.to_uppercase())
    }
}

/// Format an RFC 3339 billing timestamp as a long date, e.g.
/// `"December 31, 2024"`. Unparsable input is shown as-is.
pub fn format_billing_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests;
