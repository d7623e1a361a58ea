//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use app_constants_patch::config::{ConfigError, field};
use app_constants_patch::patch::{Diagnosis, PatchError};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::run::RunError;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - invalid args, missing required values, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - unreadable file, field not found, invalid URI, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingRequired { field: f, .. } if *f == field::PATCH_VALUES => {
            eprintln!("\nRun 'app-constants-patch init' to generate a configuration template.");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'app-constants-patch init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Prints helpful hints for common runtime errors.
pub fn print_run_hint(error: &RunError) {
    let RunError::Patch { source, .. } = error else {
        return;
    };

    match source {
        PatchError::FieldNotFound {
            diagnosis: Diagnosis::KeyAbsent,
            ..
        } => {
            eprintln!("\nThe key does not occur at all; check that this is the constants file.");
        }
        PatchError::FieldNotFound {
            diagnosis: Diagnosis::UnrecognizedSyntax,
            ..
        } => {
            eprintln!(
                "\nThe key occurs in a syntax no known dialect matches; the file may come from a newer release."
            );
        }
        PatchError::AmbiguousMatch { .. } => {
            eprintln!("\nRemove the duplicate declarations so exactly one remains.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so that `show` output on stdout stays machine-readable.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
