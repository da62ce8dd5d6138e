//! Configuration layer.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Built-in hard defaults ([`defaults`])
//!
//! # Layers
//!
//! Per-service options are resolved with the following priority (highest to lowest):
//!
//! 1. **`[service.<id>.options]`** - values set on the service itself
//! 2. **`[defaults.options]`** - service defaults, shared by every service
//! 3. **`[hard_defaults.options]`** - global defaults; unset fields take the built-in values
//!
//! The defaults layers are created once and shared by reference, so a reload
//! through [`ValidatedConfig::reload_defaults`] is seen by every service.
//!
//! # Validation
//!
//! Every layer and every service is validated. All failures are collected and
//! reported together as one [`ConfigError::Validation`].

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::{
    DefaultsSection, ServiceSection, TomlConfig, WebhookSection, default_config_template,
};
pub use validated::{Service, ServiceWebhook, ValidatedConfig, write_default_config};
