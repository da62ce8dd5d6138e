//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::options::ValidationErrors;

/// Failure to produce a [`ValidatedConfig`](super::ValidatedConfig), or to
/// write the starter file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The options file could not be opened or read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// File named by `--config`
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML, or has keys outside the known sections.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// `init` could not write the template.
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Target given by `--output`
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Every invalid interval and webhook URL found across all layers and services.
    #[error("Invalid options:\n{0}")]
    Validation(#[from] ValidationErrors),
}
