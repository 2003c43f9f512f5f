//! Input parsing for the ID-card screen.
//!
//! Raw text is checked here, before it can reach a document. Rejected
//! input never becomes an edit; the message is surfaced on the model
//! instead.

use oba_core::models::{expiration_days_in_range, EXPIRATION_DAYS_MAX, EXPIRATION_DAYS_MIN};

/// Parse the raw order input into an integer.
pub(super) fn parse_order(value: &str) -> Result<i32, String> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("order must be a whole number, got '{}'", value.trim()))
}

/// Parse and range-check the raw expiration input.
pub(super) fn parse_expiration(value: &str) -> Result<i32, String> {
    let days: i32 = value.trim().parse().map_err(|_| {
        format!("expiration days must be a whole number, got '{}'", value.trim())
    })?;
    if !expiration_days_in_range(days) {
        return Err(format!(
            "expiration days must be between {} and {}, got {}",
            EXPIRATION_DAYS_MIN, EXPIRATION_DAYS_MAX, days
        ));
    }
    Ok(days)
}
