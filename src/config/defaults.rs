//! Built-in values.
//!
//! These form the hard defaults layer unless the config file overrides them.

use crate::options::OptionsBase;

/// Default path of the configuration file.
pub const CONFIG_PATH: &str = "argus.toml";

/// Default interval between checks.
pub const INTERVAL: &str = "10m";

/// Whether semantic versioning is used when nothing else says so.
pub const SEMANTIC_VERSIONING: bool = true;

/// The built-in hard defaults layer.
#[must_use]
pub fn hard_defaults() -> OptionsBase {
    OptionsBase::new(INTERVAL, Some(SEMANTIC_VERSIONING))
}
