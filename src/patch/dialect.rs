//! Historical syntactic shapes used to declare a field.
//!
//! A [`Dialect`] is pure data: it describes what precedes the key, whether the
//! key is itself a string literal, and which separator sits between key and
//! value. [`FieldPattern`](super::FieldPattern) turns a `(Field, Dialect)` pair
//! into a compiled regex, so adding a dialect never touches matching logic.
//!
//! # Known dialects
//!
//! | Dialect          | Example                                  |
//! |------------------|------------------------------------------|
//! | `object-literal` | `service_control_url: 'http://host/api/'` |
//! | `constant-call`  | `.constant('version', '1.3.0')`          |

use super::Field;

/// Value capture shared by every dialect.
///
/// The opening and closing quote must agree, and the value may contain
/// neither that quote nor a line break. Exactly one of the two named groups
/// participates in a match.
pub(crate) const VALUE_TEMPLATE: &str = r#"(?:'(?P<single>[^'\r\n]*)'|"(?P<double>[^"\r\n]*)")"#;

/// One historical syntactic shape for a key/value assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    name: &'static str,
    opener: &'static str,
    quoted_key: bool,
    separator: char,
}

impl Dialect {
    /// Plain object-literal property: `key: 'value'`.
    ///
    /// Used by the 1.1 `SC.config` file, the 1.3 `scConfig` constant and the
    /// 1.20+ `window.defaultConfig` object.
    pub const OBJECT_LITERAL: Self = Self {
        name: "object-literal",
        opener: "",
        quoted_key: false,
        separator: ':',
    };

    /// Fluent AngularJS registration: `.constant('key', 'value')`.
    pub const CONSTANT_CALL: Self = Self {
        name: "constant-call",
        opener: r"\bconstant\s*\(\s*",
        quoted_key: true,
        separator: ',',
    };

    /// Returns the dialect name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Builds the regex source for `key` in this dialect.
    ///
    /// Unquoted keys are anchored on a word boundary so that a longer
    /// identifier ending in the key (`app_version`) never matches.
    #[must_use]
    pub fn template(&self, key: &str) -> String {
        let key = regex::escape(key);
        let key = if self.quoted_key {
            format!(r#"(?:'{key}'|"{key}")"#)
        } else {
            format!(r"\b{key}")
        };
        let separator = regex::escape(self.separator.encode_utf8(&mut [0; 4]));

        format!(
            r"{opener}{key}\s*{separator}\s*{VALUE_TEMPLATE}",
            opener = self.opener
        )
    }
}

/// Built-in `(Field, Dialect)` pairs, in the order they are attempted.
///
/// Both fields accept both dialects. The URL has lived in object literals for
/// every known release, so that shape is tried first; the version started out
/// as a `.constant` registration.
pub const BUILTIN_TABLE: [(Field, Dialect); 4] = [
    (Field::ServiceControlUrl, Dialect::OBJECT_LITERAL),
    (Field::ServiceControlUrl, Dialect::CONSTANT_CALL),
    (Field::Version, Dialect::CONSTANT_CALL),
    (Field::Version, Dialect::OBJECT_LITERAL),
];
