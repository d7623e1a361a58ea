//! Error types for field matching and patching.

use std::fmt;

use thiserror::Error;

use super::Field;

/// Error type for extraction, replacement, and URI validation.
///
/// Every failure of the engine surfaces as one of these variants. None of them
/// leave a partially patched buffer behind: callers either get the complete
/// rewritten text or an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    /// No dialect pattern matched the requested field.
    #[error("Field '{}' not found (tried: {}): {diagnosis}", field.key(), tried.join(", "))]
    FieldNotFound {
        /// The field that was looked up
        field: Field,
        /// Names of the dialects that were attempted, in order
        tried: Vec<&'static str>,
        /// Why nothing matched
        diagnosis: Diagnosis,
    },

    /// A dialect pattern matched the field at more than one location.
    ///
    /// This indicates a file the pattern table was not designed for; the
    /// engine refuses to guess which occurrence is authoritative.
    #[error(
        "Field '{}' matched {occurrences} times using the {dialect} dialect",
        field.key()
    )]
    AmbiguousMatch {
        /// The field that was looked up
        field: Field,
        /// The dialect whose pattern matched more than once
        dialect: &'static str,
        /// Number of non-overlapping matches found
        occurrences: usize,
    },

    /// A URL value is not an absolute URI.
    #[error("Invalid URI '{value}': {reason}")]
    InvalidUri {
        /// The rejected value
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// A replacement value would break the surrounding string literal.
    #[error("Illegal value for '{}' ({value:?}): {reason}", field.key())]
    IllegalReplacementValue {
        /// The field being replaced
        field: Field,
        /// The rejected replacement
        value: String,
        /// Which character made it illegal
        reason: String,
    },
}

/// Explains why a field was not found under any dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    /// The key literal does not occur anywhere in the text.
    ///
    /// Usually means the wrong file was supplied.
    KeyAbsent,

    /// The key literal occurs, but not in any recognized syntax.
    ///
    /// Usually means the file uses a dialect the pattern table does not know.
    UnrecognizedSyntax,
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyAbsent => write!(f, "key does not occur in the file"),
            Self::UnrecognizedSyntax => {
                write!(f, "key occurs but in no recognized syntax")
            }
        }
    }
}

impl PatchError {
    /// Returns `true` if this is a [`PatchError::FieldNotFound`] error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::FieldNotFound { .. })
    }
}
