//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Default constants file, relative to the working directory.
pub const TARGET_FILE: &str = "app/js/app.constants.js";

/// Default output path for `init`.
pub const CONFIG_FILE: &str = "app-constants-patch.toml";
