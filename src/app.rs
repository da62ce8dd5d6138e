//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, error hints and the
//! subcommand handlers that support the main entry point.

use std::io::{self, Write};

use argus_options::config::{ConfigError, ValidatedConfig};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable file, invalid options, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'argus-options init' to generate a configuration template.");
        }
        ConfigError::Validation(_) => {
            eprintln!(
                "\nIntervals use the 'AhBmCs' format, e.g. \"10m\" or \"1h30m\". \
                 Webhook URLs must be absolute."
            );
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Prints every service's effective options.
pub fn print_effective(config: &ValidatedConfig, out: &mut impl Write) -> io::Result<()> {
    for service in config.services.values() {
        writeln!(out, "{service}")?;
    }
    Ok(())
}

/// Prints the options each service sets itself, as YAML.
pub fn print_dump(config: &ValidatedConfig, out: &mut impl Write) -> io::Result<()> {
    for service in config.services.values() {
        writeln!(out, "# {}", service.id)?;
        write!(out, "{}", service.options)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_options::config::{Cli, TomlConfig};

    fn config() -> ValidatedConfig {
        let toml = TomlConfig::parse(
            r#"
            [defaults.options]
            interval = "30m"

            [service.a.options]
            interval = "5m"

            [service.b]
        "#,
        )
        .unwrap();
        ValidatedConfig::from_raw(&Cli::parse_from_iter(["argus-options"]), toml).unwrap()
    }

    #[test]
    fn effective_lists_every_service() {
        let mut out = Vec::new();
        print_effective(&config(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "a: active=true, interval=5m (root), semantic_versioning=true\n\
             b: active=true, interval=30m (defaults), semantic_versioning=true\n"
        );
    }

    #[test]
    fn dump_echoes_only_set_values() {
        let mut out = Vec::new();
        print_dump(&config(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "# a\ninterval: 5m\n# b\n{}\n"
        );
    }
}
