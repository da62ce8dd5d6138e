//! Validated configuration with the shared defaults layers attached.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use url::Url;

use crate::options::{Options, OptionsBase, SharedBase, ValidationError, ValidationErrors};
use crate::webhook::{HttpRequest, ServiceStatus, WebHook, WebhookError};

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::{ServiceSection, TomlConfig};

/// Fully validated configuration.
///
/// Owns the two shared defaults layers and is their only writer. Every
/// service's [`Options`] holds handles to those same layers.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Service-level defaults layer
    pub defaults: SharedBase,

    /// Global hard defaults layer
    pub hard_defaults: SharedBase,

    /// Monitored services, keyed by ID
    pub services: BTreeMap<String, Service>,

    /// Verbose logging enabled
    pub verbose: bool,
}

/// A monitored service with its validated options.
#[derive(Debug, Clone)]
pub struct Service {
    /// Service ID
    pub id: String,

    /// Options, with the shared defaults layers attached
    pub options: Options,

    /// Webhook notified about new releases
    pub webhook: Option<ServiceWebhook>,
}

/// Validated webhook settings of a service.
#[derive(Debug, Clone)]
pub struct ServiceWebhook {
    /// Webhook URL
    pub url: Url,

    /// Header name to value template
    pub custom_headers: BTreeMap<String, String>,
}

impl Service {
    /// Builds the webhook request announcing `latest_version`, with the
    /// custom headers rendered.
    ///
    /// Returns `None` if the service has no webhook.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] if a custom header cannot be rendered.
    pub fn webhook_request(
        &self,
        latest_version: &str,
    ) -> Result<Option<HttpRequest>, WebhookError> {
        let Some(target) = &self.webhook else {
            return Ok(None);
        };

        let hook = WebHook::new(
            target.custom_headers.clone(),
            ServiceStatus {
                service_id: self.id.clone(),
                latest_version: latest_version.to_string(),
            },
        );

        let mut request = HttpRequest::post(target.url.clone());
        hook.set_custom_headers(&mut request)?;
        Ok(Some(request))
    }
}

impl fmt::Display for Service {
    /// Writes the effective options of the service.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = self
            .options
            .interval_source()
            .map_or_else(|| "unset".to_string(), |s| s.to_string());

        write!(
            f,
            "{}: active={}, interval={} ({}), semantic_versioning={}",
            self.id,
            self.options.get_active(),
            self.options.get_interval(),
            source,
            self.options.get_semantic_versioning(),
        )
    }
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ services: {}, defaults: {}, hard_defaults: {} }}",
            self.services.len(),
            LayerSummary(&self.defaults.snapshot()),
            LayerSummary(&self.hard_defaults.snapshot()),
        )
    }
}

/// One-line rendering of a defaults layer for logs.
struct LayerSummary<'a>(&'a OptionsBase);

impl fmt::Display for LayerSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interval = self.0.interval.as_deref().unwrap_or("-");
        let semver = self
            .0
            .semantic_versioning
            .map_or_else(|| "-".to_string(), |b| b.to_string());
        write!(f, "{{ interval: {interval}, semantic_versioning: {semver} }}")
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and a parsed TOML config.
    ///
    /// Builds the shared defaults layers (TOML hard defaults on top of the
    /// built-in ones), attaches them to every service, and validates every
    /// layer and service.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] carrying every invalid interval and
    /// webhook URL found.
    pub fn from_raw(cli: &Cli, toml: TomlConfig) -> Result<Self, ConfigError> {
        let mut errs = ValidationErrors::new();

        let mut hard_defaults =
            merge_layers(defaults::hard_defaults(), toml.hard_defaults.options);
        collect(hard_defaults.check_values("hard_defaults.options."), &mut errs);

        let mut service_defaults = toml.defaults.options;
        collect(service_defaults.check_values("defaults.options."), &mut errs);

        let defaults = service_defaults.shared();
        let hard_defaults = hard_defaults.shared();

        let mut services = BTreeMap::new();
        for (id, section) in toml.service {
            let service = Self::build_service(&id, section, &defaults, &hard_defaults, &mut errs);
            services.insert(id, service);
        }

        errs.into_result()?;

        Ok(Self {
            defaults,
            hard_defaults,
            services,
            verbose: cli.verbose,
        })
    }

    /// Loads the config file named by `cli.config` and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - Any option or webhook URL is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = TomlConfig::load(&cli.config)?;
        Self::from_raw(cli, toml)
    }

    /// Replaces the service-level defaults, returning the previous values.
    ///
    /// The new values are validated first; on failure nothing changes. Every
    /// service sees the new values immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if `base` is invalid.
    pub fn reload_defaults(
        &mut self,
        mut base: OptionsBase,
    ) -> Result<OptionsBase, ConfigError> {
        base.check_values("defaults.options.")?;
        tracing::info!("Reloading defaults: {}", LayerSummary(&base));
        Ok(self.defaults.replace(base))
    }

    /// Returns the service with the given ID.
    #[must_use]
    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.get(id)
    }

    fn build_service(
        id: &str,
        section: ServiceSection,
        defaults: &SharedBase,
        hard_defaults: &SharedBase,
        errs: &mut ValidationErrors,
    ) -> Service {
        let mut options = section.options;
        options.apply_defaults(Some(defaults.clone()), Some(hard_defaults.clone()));

        if let Err(e) = options.check_values(&format!("service.{id}.options.")) {
            tracing::warn!(service = id, "Invalid options: {e}");
            errs.extend(e);
        }

        let webhook = section.webhook.and_then(|hook| match Url::parse(&hook.url) {
            Ok(url) => Some(ServiceWebhook {
                url,
                custom_headers: hook.custom_headers,
            }),
            Err(e) => {
                tracing::warn!(service = id, "Invalid webhook URL: {e}");
                errs.push(ValidationError::Url {
                    prefix: format!("service.{id}.webhook."),
                    url: hook.url,
                    reason: e.to_string(),
                });
                None
            }
        });

        Service {
            id: id.to_string(),
            options,
            webhook,
        }
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

/// Overlays the values set in `overrides` onto `base`.
fn merge_layers(base: OptionsBase, overrides: OptionsBase) -> OptionsBase {
    OptionsBase {
        interval: overrides
            .interval
            .filter(|s| !s.is_empty())
            .or(base.interval),
        semantic_versioning: overrides.semantic_versioning.or(base.semantic_versioning),
    }
}

fn collect(result: Result<(), ValidationErrors>, errs: &mut ValidationErrors) {
    if let Err(e) = result {
        errs.extend(e);
    }
}
