//! Error types for option validation and interval parsing.

use std::fmt;

use thiserror::Error;

/// Error type for turning an interval string into a [`std::time::Duration`].
#[derive(Debug, Error)]
pub enum IntervalError {
    /// No layer holds an interval.
    #[error("no interval set")]
    Unset,

    /// The interval is not a valid duration expression.
    #[error("invalid interval {value:?}: {source}")]
    Malformed {
        /// The offending interval string
        value: String,
        /// Underlying parse error
        #[source]
        source: humantime::DurationError,
    },
}

/// A single field-scoped validation failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The interval could not be parsed, even after normalization.
    #[error("{prefix}interval: {value:?} <invalid> (use 'AhBmCs' duration format)")]
    Interval {
        /// Caller-supplied context label (e.g. `service.foo.options.`)
        prefix: String,
        /// The offending value
        value: String,
    },

    /// A webhook URL does not parse.
    #[error("{prefix}url: {url:?} <invalid> ({reason})")]
    Url {
        /// Caller-supplied context label (e.g. `service.foo.webhook.`)
        prefix: String,
        /// The offending URL
        url: String,
        /// Parser message
        reason: String,
    },
}

/// A batch of validation failures, reported as one error.
///
/// Each failure is rendered on its own line.
#[derive(Debug, Default)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Creates an empty batch.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds a failure to the batch.
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Moves every failure of `other` into this batch.
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Returns true if no failures were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the recorded failures.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Converts the batch into a `Result`, `Ok` when empty.
    ///
    /// # Errors
    ///
    /// Returns `self` if at least one failure was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
