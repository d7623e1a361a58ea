//! Field location and patching engine for JavaScript constants files.
//!
//! This module provides:
//! - The patchable fields ([`Field`])
//! - Historical declaration shapes as data ([`Dialect`])
//! - Compiled per-dialect patterns and their outcomes ([`FieldPattern`], [`MatchResult`])
//! - Dialect iteration, extraction and replacement ([`FieldMatcher`])
//! - All-or-nothing multi-field edits ([`PatchSet`])
//! - Absolute URI validation ([`validate_uri`])
//!
//! # Text Handling
//!
//! The constants file is opaque text. Nothing is parsed beyond the located
//! key/value span, and a replacement only splices a new value between the
//! two quotes already found; every other byte is copied unchanged.
//!
//! # Thread Safety
//!
//! The built-in pattern table is compiled once and never mutated. All
//! operations are pure functions of their inputs.

mod dialect;
mod edit;
mod error;
mod field;
mod matcher;
mod pattern;
mod uri;

#[cfg(test)]
mod dialect_tests;
#[cfg(test)]
mod pattern_tests;
#[cfg(test)]
mod uri_tests;
#[cfg(test)]
mod variants_tests;

pub use dialect::{BUILTIN_TABLE, Dialect};
pub use edit::PatchSet;
pub use error::{Diagnosis, PatchError};
pub use field::Field;
pub use matcher::{CheckedConstants, FieldMatcher, extract_value, replace_value};
pub use pattern::{FieldMatch, FieldPattern, MatchResult, Quote, builtin_patterns};
pub use uri::validate_uri;
