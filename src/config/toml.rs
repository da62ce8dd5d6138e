//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::options::{Options, OptionsBase};

use super::ConfigError;

/// Root configuration structure from TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Service-level defaults
    #[serde(default)]
    pub defaults: DefaultsSection,

    /// Overrides for the built-in hard defaults
    #[serde(default)]
    pub hard_defaults: DefaultsSection,

    /// Monitored services, keyed by ID
    #[serde(default)]
    pub service: BTreeMap<String, ServiceSection>,
}

/// A defaults layer section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsSection {
    /// Option values of this layer
    #[serde(default)]
    pub options: OptionsBase,
}

/// One monitored service.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceSection {
    /// Options set directly on the service
    #[serde(default)]
    pub options: Options,

    /// Webhook notified about new releases
    pub webhook: Option<WebhookSection>,
}

/// Webhook section of a service.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Webhook URL
    pub url: String,

    /// Header name to value template
    #[serde(default)]
    pub custom_headers: BTreeMap<String, String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Argus options configuration file
#
# Each option is resolved per service in this order:
#   [service.<id>.options] > [defaults.options] > [hard_defaults.options] > built-in
# The built-in hard defaults are interval = "10m", semantic_versioning = true.
# `active` is only read from the service itself (unset means active).

[defaults.options]
# Time between checks, e.g. "30s", "10m", "1h30m". A bare number is seconds.
interval = "10m"
# Compare versions using semantic versioning rules
semantic_versioning = true

# [hard_defaults.options]
# interval = "1h"

[service.example.options]
# active = true
# interval = "5m"
# semantic_versioning = false

# [service.example.webhook]
# url = "https://example.com/hook"
# Available variables: {{ service_id }}, {{ version }}
# [service.example.webhook.custom_headers]
# X-Version = "{{ version }}"
"#
    .to_string()
}
