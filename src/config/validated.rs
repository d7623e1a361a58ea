//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::patch::{Field, PatchSet};

use super::cli::{Cli, Command};
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// What the application does with the constants file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the current field values.
    Show {
        /// Print as JSON instead of plain lines
        json: bool,
    },

    /// Verify the file can be patched at install time.
    Check,

    /// Rewrite field values.
    Patch {
        /// Values to write (never empty)
        patch: PatchSet,
        /// Log the changes without writing the file
        dry_run: bool,
    },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Show { json } => write!(f, "show (json: {json})"),
            Self::Check => write!(f, "check"),
            Self::Patch { patch, dry_run } => {
                let fields: Vec<_> = patch.iter().map(|(field, _)| field.key()).collect();
                write!(f, "patch [{}] (dry_run: {dry_run})", fields.join(", "))
            }
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Constants file to operate on
    pub file: PathBuf,

    /// Requested action
    pub action: Action,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ file: {}, action: {} }}",
            self.file.display(),
            self.action
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command is `init`, which has no run configuration
    /// - `patch` has neither a URL nor a version to write
    /// - The URL is not an absolute URI
    /// - A value contains a line break or a backslash
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let action = match &cli.command {
            Command::Show { json, .. } => Action::Show { json: *json },
            Command::Check { .. } => Action::Check,
            Command::Patch {
                url,
                app_version,
                dry_run,
                ..
            } => Action::Patch {
                patch: Self::build_patch(url.as_deref(), app_version.as_deref(), toml)?,
                // Either source enables dry-run
                dry_run: *dry_run || toml.is_some_and(|t| t.patch.dry_run),
            },
            Command::Init { .. } => return Err(ConfigError::InitCommand),
        };

        Ok(Self {
            file: Self::resolve_file(cli, toml),
            action,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_file(cli: &Cli, toml: Option<&TomlConfig>) -> PathBuf {
        // Priority: CLI explicit > TOML > default
        cli.file().cloned().unwrap_or_else(|| {
            toml.and_then(|t| t.target.file.as_deref())
                .map_or_else(|| PathBuf::from(defaults::TARGET_FILE), PathBuf::from)
        })
    }

    fn build_patch(
        url: Option<&str>,
        version: Option<&str>,
        toml: Option<&TomlConfig>,
    ) -> Result<PatchSet, ConfigError> {
        let section = toml.map(|t| &t.patch);

        // Priority: CLI explicit > TOML
        let url = url.or_else(|| section.and_then(|p| p.service_control_url.as_deref()));
        let version = version.or_else(|| section.and_then(|p| p.version.as_deref()));

        let mut patch = PatchSet::new();
        for (field, value) in [(Field::ServiceControlUrl, url), (Field::Version, version)] {
            if let Some(value) = value {
                PatchSet::validate_value(field, value)
                    .map_err(|source| ConfigError::InvalidValue { field, source })?;
                patch = patch.with(field, value);
            }
        }

        if patch.is_empty() {
            return Err(ConfigError::missing(
                field::PATCH_VALUES,
                "Use --url/--app-version or set patch.service_control_url/patch.version in config file",
            ));
        }

        Ok(patch)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

