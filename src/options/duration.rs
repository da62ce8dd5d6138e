//! Interval parsing and normalization.
//!
//! Intervals use compact duration expressions such as `10s`, `1m10s` or
//! `3h2m1s`. A value made only of decimal digits is read as seconds.

use std::time::Duration;

use super::IntervalError;

/// Parses an interval expression into a [`Duration`].
///
/// Bare integers are not accepted here; run [`normalize_interval`] first.
///
/// # Errors
///
/// Returns [`IntervalError::Malformed`] if the string is not a valid duration.
pub fn parse_interval(value: &str) -> Result<Duration, IntervalError> {
    humantime::parse_duration(value).map_err(|source| IntervalError::Malformed {
        value: value.to_string(),
        source,
    })
}

/// Validates an interval and returns its normalized form.
///
/// A digits-only value gets an `s` suffix. The returned string is always
/// accepted by [`parse_interval`].
///
/// # Errors
///
/// Returns [`IntervalError::Malformed`] if the value still fails to parse
/// after normalization.
pub fn normalize_interval(value: &str) -> Result<String, IntervalError> {
    let normalized = if is_bare_seconds(value) {
        format!("{value}s")
    } else {
        value.to_string()
    };

    parse_interval(&normalized)?;
    Ok(normalized)
}

/// Returns true for a non-empty string made only of ASCII digits.
fn is_bare_seconds(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
