//! Validation of configured intervals.

use super::root::Options;
use super::{ValidationError, ValidationErrors, duration, non_empty};

impl Options {
    /// Validates the service's own values, normalizing them in place.
    ///
    /// Only the root layer is checked; attached layers are validated by
    /// their owner. A digits-only interval is rewritten with an `s` suffix.
    ///
    /// # Errors
    ///
    /// Returns every failure found, each message starting with `prefix`.
    pub fn check_values(&mut self, prefix: &str) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();
        check_interval(&mut self.interval, prefix, &mut errs);
        errs.into_result()
    }
}

/// Validates and normalizes an interval field, recording any failure.
///
/// An empty value is valid and is normalized to unset.
pub(super) fn check_interval(
    interval: &mut Option<String>,
    prefix: &str,
    errs: &mut ValidationErrors,
) {
    let Some(value) = non_empty::get(interval) else {
        *interval = None;
        return;
    };

    match duration::normalize_interval(value) {
        Ok(normalized) => {
            if normalized != value {
                tracing::debug!("{prefix}interval: normalized {value:?} to {normalized:?}");
            }
            *interval = Some(normalized);
        }
        Err(_) => errs.push(ValidationError::Interval {
            prefix: prefix.to_string(),
            value: value.to_string(),
        }),
    }
}
