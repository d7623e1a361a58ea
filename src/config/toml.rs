//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Target file configuration section
    #[serde(default)]
    pub target: TargetSection,

    /// Field values to write
    #[serde(default)]
    pub patch: PatchSection,
}

/// Target file configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetSection {
    /// Path to the constants file, relative to the working directory
    pub file: Option<String>,
}

/// Patch configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatchSection {
    /// New service control URL
    pub service_control_url: Option<String>,

    /// New application version
    pub version: Option<String>,

    /// Log the changes without writing the file
    #[serde(default)]
    pub dry_run: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# App Constants Patch Configuration File

[target]
# Constants file to read and rewrite (default: app/js/app.constants.js)
# Relative paths are resolved against the working directory.
# file = "app/js/app.constants.js"

[patch]
# Service control URL written by `patch` (must be an absolute URI)
# Can be overridden by the --url CLI flag
# service_control_url = "http://localhost:33333/api/"

# Version string written by `patch`
# Can be overridden by the --app-version CLI flag
# version = "1.20.0"

# Log the changes without writing the file
# dry_run = false
"#
    .to_string()
}
