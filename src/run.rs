//! Command execution.
//!
//! This module reads the constants file, drives the patch engine for the
//! requested action, and writes the result back atomically.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use app_constants_patch::config::{Action, ValidatedConfig};
use app_constants_patch::patch::{CheckedConstants, Field, FieldMatcher, PatchError, PatchSet};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to read the constants file.
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        /// Path to the constants file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to write the patched constants file.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        /// Path to the constants file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The patch engine rejected the file or the values.
    #[error("{}: {source}", path.display())]
    Patch {
        /// Path to the constants file
        path: PathBuf,
        /// Underlying engine error
        #[source]
        source: PatchError,
    },
}

/// Result of a successfully executed action.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Rendered field values for `show`.
    Shown(String),

    /// The file passed the installation check.
    Checked(CheckedConstants),

    /// The file already held the requested values; nothing was written.
    Unchanged,

    /// Dry-run: the patched text was computed but not written.
    DryRun,

    /// The patched file was written.
    Written,
}

/// Executes the configured action against the constants file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, or if the
/// patch engine rejects it. Nothing is written on error.
pub fn execute(config: &ValidatedConfig) -> Result<Outcome, RunError> {
    let path = config.file.as_path();
    let text = std::fs::read_to_string(path).map_err(|e| RunError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!("Read {} bytes from {}", text.len(), path.display());

    let matcher = FieldMatcher::default();

    match &config.action {
        Action::Show { json } => {
            let values = matcher.extract_all(&text, Field::ALL);
            Ok(Outcome::Shown(render_values(&values, *json)))
        }
        Action::Check => {
            let checked = matcher.check(&text).map_err(|e| patch_error(path, e))?;
            tracing::info!(
                "{} is patchable (service_control_url: {}, version: '{}')",
                path.display(),
                checked.service_control_url,
                checked.version
            );
            Ok(Outcome::Checked(checked))
        }
        Action::Patch { patch, dry_run } => apply_patch(path, &matcher, &text, patch, *dry_run),
    }
}

/// Applies `patch` to `text` and persists the result unless unchanged or dry-run.
fn apply_patch(
    path: &Path,
    matcher: &FieldMatcher<'_>,
    text: &str,
    patch: &PatchSet,
    dry_run: bool,
) -> Result<Outcome, RunError> {
    let patched = patch.apply(matcher, text).map_err(|e| patch_error(path, e))?;

    for (field, value) in patch.iter() {
        let previous = matcher.extract(text, field).unwrap_or_default();
        if previous == value {
            tracing::info!("{field} already '{value}'");
        } else {
            tracing::info!("{field}: '{previous}' -> '{value}'");
        }
    }

    if patched == text {
        tracing::info!("{} is already up to date", path.display());
        return Ok(Outcome::Unchanged);
    }

    if dry_run {
        tracing::warn!("Dry-run: {} was not written", path.display());
        return Ok(Outcome::DryRun);
    }

    write_atomic(path, &patched)?;
    tracing::info!("Patched {}", path.display());
    Ok(Outcome::Written)
}

/// Writes `content` to `path` using write-to-temp-then-rename.
///
/// The file is either fully replaced or left untouched.
fn write_atomic(path: &Path, content: &str) -> Result<(), RunError> {
    let write_error = |source| RunError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Append .tmp instead of replacing extension (app.constants.js -> app.constants.js.tmp)
    let temp_path = PathBuf::from(format!("{}.tmp", path.display()));

    std::fs::write(&temp_path, content).map_err(write_error)?;
    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(write_error(e));
    }

    Ok(())
}

fn patch_error(path: &Path, source: PatchError) -> RunError {
    RunError::Patch {
        path: path.to_path_buf(),
        source,
    }
}

/// Renders extracted values as plain `key: value` lines or a JSON object.
///
/// Missing values render as `<error>` lines, or `null` in JSON.
fn render_values(values: &BTreeMap<Field, Result<String, PatchError>>, json: bool) -> String {
    if json {
        let object: Map<String, Value> = values
            .iter()
            .map(|(field, value)| {
                let value = value
                    .as_ref()
                    .map_or(Value::Null, |v| Value::String(v.clone()));
                (field.key().to_string(), value)
            })
            .collect();
        return format!("{:#}", Value::Object(object));
    }

    values
        .iter()
        .map(|(field, value)| match value {
            Ok(v) => format!("{field}: {v}"),
            Err(e) => format!("{field}: <{e}>"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
