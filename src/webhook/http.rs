//! Release notification request, as handed to header templating.

/// A webhook call announcing a new release of a service.
///
/// Holds what [`WebHook::set_custom_headers`](super::WebHook::set_custom_headers)
/// reads and writes; there is no body and nothing here sends it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Verb of the call, POST for release notifications
    pub method: http::Method,
    /// Webhook endpoint from the service's `[service.<id>.webhook]` section
    pub url: url::Url,
    /// Headers, including the rendered custom ones
    pub headers: http::HeaderMap,
}

impl HttpRequest {
    /// Starts a call with an empty header map.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
        }
    }

    /// Starts a release notification to `url`.
    #[must_use]
    pub fn post(url: url::Url) -> Self {
        Self::new(http::Method::POST, url)
    }

    /// Appends a header value. Earlier values under the same name stay; custom
    /// headers rendered later replace them all.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}
