//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// App Constants Patch
///
/// Reads, validates and rewrites the service control URL and version
/// fields of a dashboard's JavaScript constants file.
#[derive(Debug, Parser)]
#[command(name = "app-constants-patch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for app-constants-patch
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current field values
    Show {
        /// Constants file to read
        file: Option<PathBuf>,

        /// Print the values as a JSON object
        #[arg(long)]
        json: bool,
    },

    /// Verify the file can be patched at install time
    Check {
        /// Constants file to verify
        file: Option<PathBuf>,
    },

    /// Rewrite field values in place
    Patch {
        /// Constants file to rewrite
        file: Option<PathBuf>,

        /// New service control URL (must be an absolute URI)
        #[arg(long)]
        url: Option<String>,

        /// New application version string
        #[arg(long = "app-version", value_name = "VERSION")]
        app_version: Option<String>,

        /// Log the changes without writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = crate::config::defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }

    /// Returns the file given on the command line, if any.
    #[must_use]
    pub const fn file(&self) -> Option<&PathBuf> {
        match &self.command {
            Command::Show { file, .. } | Command::Check { file } | Command::Patch { file, .. } => {
                file.as_ref()
            }
            Command::Init { .. } => None,
        }
    }
}
