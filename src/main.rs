//! Argus options
//!
//! Entry point for the argus-options application.

use std::io::{self, Write};
use std::process::ExitCode;

use argus_options::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;

use app::{exit_code, print_config_hint, print_dump, print_effective, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    setup_tracing(cli.verbose);

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };
    tracing::info!("{config}");

    let mut stdout = io::stdout().lock();
    let result = match cli.command() {
        Command::Check | Command::Init { .. } => print_effective(&config, &mut stdout),
        Command::Dump => print_dump(&config, &mut stdout),
        Command::Headers {
            service,
            latest_version,
        } => return handle_headers(&config, &service, &latest_version, &mut stdout),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("Failed to write output: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `headers` subcommand.
fn handle_headers(
    config: &ValidatedConfig,
    service_id: &str,
    latest_version: &str,
    out: &mut impl Write,
) -> ExitCode {
    let Some(service) = config.service(service_id) else {
        eprintln!("Error: unknown service '{service_id}'");
        return exit_code::CONFIG_ERROR;
    };

    let request = match service.webhook_request(latest_version) {
        Ok(Some(request)) => request,
        Ok(None) => {
            eprintln!("Error: service '{service_id}' has no webhook");
            return exit_code::CONFIG_ERROR;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return exit_code::CONFIG_ERROR;
        }
    };

    for (name, value) in &request.headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        if let Err(e) = writeln!(out, "{name}: {value}") {
            tracing::error!("Failed to write output: {e}");
            return exit_code::CONFIG_ERROR;
        }
    }

    exit_code::SUCCESS
}
