//! Compiled field patterns and their match results.

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::Field;
use super::dialect::{BUILTIN_TABLE, Dialect};

/// Quote character delimiting a matched value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    /// `'`
    Single,
    /// `"`
    Double,
}

impl Quote {
    /// Returns the quote as a character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }
}

/// A field compiled against one dialect.
///
/// Immutable once built. The built-in table is available through
/// [`builtin_patterns`].
#[derive(Debug, Clone)]
pub struct FieldPattern {
    field: Field,
    dialect: Dialect,
    regex: Regex,
}

impl FieldPattern {
    /// Compiles the pattern for `field` written in `dialect`.
    ///
    /// # Errors
    ///
    /// Returns an error if the generated template is not a valid regex.
    pub fn new(field: Field, dialect: Dialect) -> Result<Self, regex::Error> {
        Ok(Self {
            field,
            dialect,
            regex: Regex::new(&dialect.template(field.key()))?,
        })
    }

    /// Returns the field this pattern locates.
    #[must_use]
    pub const fn field(&self) -> Field {
        self.field
    }

    /// Returns the dialect this pattern recognizes.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Locates the field's value in `text`.
    ///
    /// Returns [`MatchResult::Found`] only when the pattern matches exactly
    /// once. Several non-overlapping matches yield [`MatchResult::Ambiguous`].
    #[must_use]
    pub fn locate<'t>(&self, text: &'t str) -> MatchResult<'t> {
        let mut matches = self.regex.captures_iter(text);

        let Some(first) = matches.next() else {
            return MatchResult::NotFound;
        };

        let extra = matches.count();
        if extra > 0 {
            return MatchResult::Ambiguous {
                occurrences: extra + 1,
            };
        }

        FieldMatch::from_captures(text, &first, self.dialect.name())
            .map_or(MatchResult::NotFound, MatchResult::Found)
    }
}

/// Outcome of applying one [`FieldPattern`] to a text.
///
/// A miss is an ordinary value so that callers can move on to the next
/// dialect without error handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult<'t> {
    /// The pattern matched exactly once.
    Found(FieldMatch<'t>),

    /// The pattern did not match.
    NotFound,

    /// The pattern matched at several locations.
    Ambiguous {
        /// Number of non-overlapping matches
        occurrences: usize,
    },
}

impl<'t> MatchResult<'t> {
    /// Returns the match, if exactly one was found.
    #[must_use]
    pub fn found(self) -> Option<FieldMatch<'t>> {
        match self {
            Self::Found(m) => Some(m),
            Self::NotFound | Self::Ambiguous { .. } => None,
        }
    }

    /// Returns `true` if the pattern matched exactly once.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// A located field value, borrowed from the searched text.
///
/// The span splits into `prefix` (key, separator and opening quote),
/// `value`, and `suffix` (the closing quote).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch<'t> {
    text: &'t str,
    span: Range<usize>,
    value: Range<usize>,
    quote: Quote,
    dialect: &'static str,
}

impl<'t> FieldMatch<'t> {
    fn from_captures(text: &'t str, caps: &Captures<'t>, dialect: &'static str) -> Option<Self> {
        let whole = caps.get(0)?;
        let (value, quote) = caps
            .name("single")
            .map(|m| (m, Quote::Single))
            .or_else(|| caps.name("double").map(|m| (m, Quote::Double)))?;

        Some(Self {
            text,
            span: whole.range(),
            value: value.range(),
            quote,
            dialect,
        })
    }

    /// Returns the captured value.
    #[must_use]
    pub fn value(&self) -> &'t str {
        &self.text[self.value.clone()]
    }

    /// Returns the matched text up to and including the opening quote.
    #[must_use]
    pub fn prefix(&self) -> &'t str {
        &self.text[self.span.start..self.value.start]
    }

    /// Returns the closing quote as matched.
    #[must_use]
    pub fn suffix(&self) -> &'t str {
        &self.text[self.value.end..self.span.end]
    }

    /// Returns the complete text the match was found in.
    #[must_use]
    pub const fn source(&self) -> &'t str {
        self.text
    }

    /// Returns the full matched text.
    #[must_use]
    pub fn as_str(&self) -> &'t str {
        &self.text[self.span.clone()]
    }

    /// Returns the byte range of the whole match.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the byte range of the value within the searched text.
    #[must_use]
    pub fn value_span(&self) -> Range<usize> {
        self.value.clone()
    }

    /// Returns the quote delimiting the value.
    #[must_use]
    pub const fn quote(&self) -> Quote {
        self.quote
    }

    /// Returns the name of the dialect that matched.
    #[must_use]
    pub const fn dialect(&self) -> &'static str {
        self.dialect
    }
}

static BUILTIN_PATTERNS: LazyLock<Vec<FieldPattern>> = LazyLock::new(|| {
    BUILTIN_TABLE
        .iter()
        .map(|&(field, dialect)| {
            FieldPattern::new(field, dialect).expect("built-in dialect templates must compile")
        })
        .collect()
});

/// Returns the built-in pattern table, compiled on first use.
#[must_use]
pub fn builtin_patterns() -> &'static [FieldPattern] {
    &BUILTIN_PATTERNS
}
