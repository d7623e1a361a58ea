//! Configuration layer for App Constants Patch.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`], [`Action`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The target file falls back to [`defaults::TARGET_FILE`]. The patch values
//! (`service_control_url`, `version`) have no defaults; `patch` requires at
//! least one of them.
//!
//! # Boolean Flag Semantics
//!
//! `--dry-run` uses OR semantics: if set in either CLI or TOML, the result is
//! `true`. The CLI cannot turn off a dry run configured in TOML.
//!
//! # Validation
//!
//! The service control URL is checked as an absolute URI and both values are
//! checked for line breaks and backslashes while the configuration is
//! resolved, before the constants file is opened. Quote characters can only be
//! checked once the file's quoting is known.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{Action, ValidatedConfig, write_default_config};
