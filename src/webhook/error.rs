//! Error types for webhook header templating.

use thiserror::Error;

/// Error type for applying custom headers to a webhook request.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The header value template failed to render.
    #[error("Invalid template for header '{name}': {reason}")]
    Template {
        /// Header whose template failed
        name: String,
        /// Reason for the failure
        reason: String,
    },

    /// The configured header name is not a valid HTTP header name.
    #[error("Invalid header name '{name}': {source}")]
    InvalidHeaderName {
        /// The invalid header name
        name: String,
        /// Underlying parse error
        #[source]
        source: http::header::InvalidHeaderName,
    },

    /// The rendered value is not a valid HTTP header value.
    #[error("Invalid value for header '{name}': {source}")]
    InvalidHeaderValue {
        /// The header name
        name: String,
        /// Underlying parse error
        #[source]
        source: http::header::InvalidHeaderValue,
    },
}
