//! App Constants Patch
//!
//! Entry point for the app-constants-patch application.

use app_constants_patch::config::{Cli, Command, ValidatedConfig, write_default_config};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, print_config_hint, print_run_hint, setup_tracing};
use run::Outcome;

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Command::Init { output } = &cli.command {
        return handle_init(output);
    }

    // Load and validate configuration
    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    // Setup logging and run
    setup_tracing(config.verbose);
    tracing::debug!("{config}");

    run_application(&config)
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

/// Runs the configured action and maps the outcome to an exit code.
#[cfg(not(tarpaulin_include))]
fn run_application(config: &ValidatedConfig) -> ExitCode {
    match run::execute(config) {
        Ok(Outcome::Shown(report)) => {
            println!("{report}");
            exit_code::SUCCESS
        }
        Ok(_) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            print_run_hint(&e);
            exit_code::runtime_error()
        }
    }
}
