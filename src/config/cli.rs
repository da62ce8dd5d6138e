//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// Argus options: resolve, validate and dump per-service monitoring options.
#[derive(Debug, Parser)]
#[command(name = "argus-options")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run (default: check)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    #[arg(long, short, global = true, default_value = defaults::CONFIG_PATH)]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for argus-options
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Validate the configuration and print each service's effective options
    Check,

    /// Print only the options each service sets itself
    Dump,

    /// Print the webhook headers a service would send for a version
    Headers {
        /// Service ID
        service: String,

        /// Latest version to render into the headers
        #[arg(long = "latest-version")]
        latest_version: String,
    },

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_PATH)]
        output: PathBuf,
    },
}

impl Cli {
    /// Reads `argus-options` arguments from the process command line, exiting
    /// with usage help on error.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Same as [`parse_args`](Self::parse_args) but over an explicit argument
    /// list, program name first.
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns the subcommand, defaulting to [`Command::Check`].
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Check)
    }
}
