//! Custom header templating for webhook requests.

use std::collections::BTreeMap;

use handlebars::Handlebars;
use http::{HeaderName, HeaderValue};
use serde::Serialize;

use super::{HttpRequest, WebhookError};

/// Latest known state of the service a webhook belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceStatus {
    /// Identifier of the service
    pub service_id: String,
    /// Most recent version found by the checks
    pub latest_version: String,
}

/// Values exposed to header templates.
///
/// Templates reference them as `{{ service_id }}` and `{{ version }}`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo<'a> {
    /// Identifier of the service
    #[serde(rename = "service_id")]
    pub id: &'a str,
    /// Most recent version found by the checks
    #[serde(rename = "version")]
    pub latest_version: &'a str,
}

impl<'a> From<&'a ServiceStatus> for ServiceInfo<'a> {
    fn from(status: &'a ServiceStatus) -> Self {
        Self {
            id: &status.service_id,
            latest_version: &status.latest_version,
        }
    }
}

/// Webhook configuration relevant to header templating.
#[derive(Debug, Clone, Default)]
pub struct WebHook {
    /// Header name to value template
    pub custom_headers: BTreeMap<String, String>,

    /// State of the owning service
    pub service_status: ServiceStatus,
}

impl WebHook {
    /// Creates a webhook with the given custom headers.
    #[must_use]
    pub fn new(custom_headers: BTreeMap<String, String>, service_status: ServiceStatus) -> Self {
        Self {
            custom_headers,
            service_status,
        }
    }

    /// Renders every custom header and sets it on `req`.
    ///
    /// Each rendered value replaces any value already present for that
    /// header name. With no custom headers the request is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] if a template fails to render, or if a name
    /// or rendered value is not valid in an HTTP header. Headers set before
    /// the failing one stay on the request.
    pub fn set_custom_headers(&self, req: &mut HttpRequest) -> Result<(), WebhookError> {
        if self.custom_headers.is_empty() {
            return Ok(());
        }

        let info = ServiceInfo::from(&self.service_status);
        let mut hbs = Handlebars::new();
        hbs.register_escape_fn(handlebars::no_escape);

        for (key, template) in &self.custom_headers {
            let value = hbs
                .render_template(template, &info)
                .map_err(|e| WebhookError::Template {
                    name: key.clone(),
                    reason: e.to_string(),
                })?;

            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|source| {
                WebhookError::InvalidHeaderName {
                    name: key.clone(),
                    source,
                }
            })?;
            let value = HeaderValue::from_str(&value).map_err(|source| {
                WebhookError::InvalidHeaderValue {
                    name: key.clone(),
                    source,
                }
            })?;

            tracing::trace!(service = info.id, header = %name, "setting custom header");
            req.headers.insert(name, value);
        }

        Ok(())
    }
}
