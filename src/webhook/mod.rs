//! Webhook custom headers.
//!
//! This module provides:
//! - The outbound request shape ([`HttpRequest`])
//! - Per-service custom header templates ([`WebHook`])
//! - The template context ([`ServiceInfo`]) built from [`ServiceStatus`]
//!
//! Dispatching the request, signing and retries live elsewhere.

mod error;
mod headers;
mod http;


pub use error::WebhookError;
pub use headers::{ServiceInfo, ServiceStatus, WebHook};
pub use http::HttpRequest;
