//! Dialect iteration, extraction and in-place replacement.

use std::collections::BTreeMap;

use url::Url;

use super::pattern::{FieldMatch, FieldPattern, MatchResult, Quote, builtin_patterns};
use super::{Diagnosis, Field, PatchError, validate_uri};

/// Extracts the value `pattern` locates in `text`.
///
/// # Errors
///
/// Returns [`PatchError::FieldNotFound`] if the pattern does not match and
/// [`PatchError::AmbiguousMatch`] if it matches more than once.
pub fn extract_value<'t>(text: &'t str, pattern: &FieldPattern) -> Result<&'t str, PatchError> {
    single_match(text, pattern).map(|m| m.value())
}

/// Replaces the value `pattern` locates in `text` with `new_value`.
///
/// Every byte outside the value span is copied unchanged.
///
/// # Errors
///
/// Fails when the pattern does not match exactly once, or when `new_value`
/// cannot be written between the matched quotes.
pub fn replace_value(
    text: &str,
    pattern: &FieldPattern,
    new_value: &str,
) -> Result<String, PatchError> {
    let found = single_match(text, pattern)?;
    let patched = splice(&found, pattern.field(), new_value)?;

    let confirmed = matches!(
        pattern.locate(&patched),
        MatchResult::Found(m) if m.value() == new_value
    );

    if confirmed {
        Ok(patched)
    } else {
        Err(rematch_error(pattern.field(), new_value))
    }
}

fn single_match<'t>(text: &'t str, pattern: &FieldPattern) -> Result<FieldMatch<'t>, PatchError> {
    let field = pattern.field();
    let dialect = pattern.dialect().name();

    match pattern.locate(text) {
        MatchResult::Found(m) => Ok(m),
        MatchResult::NotFound => Err(PatchError::FieldNotFound {
            field,
            tried: vec![dialect],
            diagnosis: diagnose(text, field),
        }),
        MatchResult::Ambiguous { occurrences } => Err(PatchError::AmbiguousMatch {
            field,
            dialect,
            occurrences,
        }),
    }
}

/// Builds `text[..value] + new_value + text[value..]` for a located field.
fn splice(found: &FieldMatch<'_>, field: Field, new_value: &str) -> Result<String, PatchError> {
    check_replacement(field, new_value, Some(found.quote()))?;

    let text = found.source();
    let span = found.value_span();

    let mut patched = String::with_capacity(text.len() - span.len() + new_value.len());
    patched.push_str(&text[..span.start]);
    patched.push_str(new_value);
    patched.push_str(&text[span.end..]);
    Ok(patched)
}

/// Rejects values that cannot live inside a single-line string literal.
///
/// With `quote` unknown (before the file has been searched), only line
/// breaks and backslashes are checked.
pub(crate) fn check_replacement(
    field: Field,
    value: &str,
    quote: Option<Quote>,
) -> Result<(), PatchError> {
    if value.contains(['\r', '\n']) {
        return Err(PatchError::IllegalReplacementValue {
            field,
            value: value.to_string(),
            reason: "contains a line break".to_string(),
        });
    }

    // JavaScript string escapes start with a backslash
    if value.contains('\\') {
        return Err(PatchError::IllegalReplacementValue {
            field,
            value: value.to_string(),
            reason: "contains a backslash".to_string(),
        });
    }

    if let Some(quote) = quote.filter(|q| value.contains(q.as_char())) {
        return Err(PatchError::IllegalReplacementValue {
            field,
            value: value.to_string(),
            reason: format!("contains the delimiting quote {}", quote.as_char()),
        });
    }

    Ok(())
}

fn rematch_error(field: Field, value: &str) -> PatchError {
    PatchError::IllegalReplacementValue {
        field,
        value: value.to_string(),
        reason: "changes how the field is matched after replacement".to_string(),
    }
}

fn diagnose(text: &str, field: Field) -> Diagnosis {
    if text.contains(field.key()) {
        Diagnosis::UnrecognizedSyntax
    } else {
        Diagnosis::KeyAbsent
    }
}

/// Locates fields by trying each known dialect in table order.
///
/// The first dialect whose pattern matches exactly once wins. A dialect that
/// matches several times stops the search with an error rather than falling
/// through, since the file clearly uses that dialect.
///
/// There is no leftmost-wins fallback for repeated declarations: a file that
/// also carries an older, commented-out `service_control_url: '...'` line is
/// reported as [`PatchError::AmbiguousMatch`] and must be cleaned up first.
///
/// # Examples
///
/// ```
/// use app_constants_patch::patch::{Field, FieldMatcher};
///
/// let text = "angular.module('sc').constant('version', '1.3.0');";
/// let matcher = FieldMatcher::default();
///
/// assert_eq!(matcher.extract(text, Field::Version).unwrap(), "1.3.0");
///
/// let patched = matcher.replace(text, Field::Version, "1.4.0").unwrap();
/// assert_eq!(patched, "angular.module('sc').constant('version', '1.4.0');");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldMatcher<'p> {
    patterns: &'p [FieldPattern],
}

impl Default for FieldMatcher<'static> {
    fn default() -> Self {
        Self::new(builtin_patterns())
    }
}

impl<'p> FieldMatcher<'p> {
    /// Creates a matcher over a custom pattern table.
    ///
    /// Patterns for the same field are attempted in slice order.
    #[must_use]
    pub const fn new(patterns: &'p [FieldPattern]) -> Self {
        Self { patterns }
    }

    /// Returns the patterns attempted for `field`, in order.
    pub fn patterns_for(&self, field: Field) -> impl Iterator<Item = &'p FieldPattern> {
        self.patterns.iter().filter(move |p| p.field() == field)
    }

    /// Locates `field` in `text`.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::FieldNotFound`] once every dialect has been
    /// exhausted, or [`PatchError::AmbiguousMatch`] if a dialect matched more
    /// than once.
    pub fn locate<'t>(&self, text: &'t str, field: Field) -> Result<FieldMatch<'t>, PatchError> {
        let mut tried = Vec::new();

        for pattern in self.patterns_for(field) {
            let dialect = pattern.dialect().name();
            tried.push(dialect);

            match pattern.locate(text) {
                MatchResult::Found(m) => {
                    tracing::debug!(
                        "Located {field} via {dialect} dialect at byte {}",
                        m.span().start
                    );
                    return Ok(m);
                }
                MatchResult::NotFound => {
                    tracing::trace!("No {dialect} match for {field}");
                }
                MatchResult::Ambiguous { occurrences } => {
                    return Err(PatchError::AmbiguousMatch {
                        field,
                        dialect,
                        occurrences,
                    });
                }
            }
        }

        Err(PatchError::FieldNotFound {
            field,
            tried,
            diagnosis: diagnose(text, field),
        })
    }

    /// Extracts the current value of `field`.
    ///
    /// # Errors
    ///
    /// See [`FieldMatcher::locate`].
    pub fn extract<'t>(&self, text: &'t str, field: Field) -> Result<&'t str, PatchError> {
        self.locate(text, field).map(|m| m.value())
    }

    /// Extracts every requested field, keeping per-field outcomes.
    ///
    /// A failure for one field does not prevent the others from being read.
    pub fn extract_all(
        &self,
        text: &str,
        fields: impl IntoIterator<Item = Field>,
    ) -> BTreeMap<Field, Result<String, PatchError>> {
        fields
            .into_iter()
            .map(|field| {
                let value = self.extract(text, field).map(str::to_string);
                (field, value)
            })
            .collect()
    }

    /// Replaces the value of `field` with `new_value`.
    ///
    /// The result is checked by locating every field again: `field` must
    /// resolve to the same dialect and yield exactly `new_value`, and every
    /// other field that was located before must still resolve to the same
    /// dialect and value.
    ///
    /// # Errors
    ///
    /// Fails if the field cannot be located, if `new_value` contains the
    /// active quote, a backslash or a line break, or if the rewritten text no
    /// longer resolves to `new_value` or moves another field.
    pub fn replace(&self, text: &str, field: Field, new_value: &str) -> Result<String, PatchError> {
        let found = self.locate(text, field)?;
        let patched = splice(&found, field, new_value)?;

        let confirmed = matches!(
            self.locate(&patched, field),
            Ok(m) if m.value() == new_value && m.dialect() == found.dialect()
        );
        if !confirmed {
            return Err(rematch_error(field, new_value));
        }

        if let Some(other) = Field::ALL
            .into_iter()
            .filter(|&other| other != field)
            .find(|&other| self.resolved(text, other) != self.resolved(&patched, other))
        {
            return Err(PatchError::IllegalReplacementValue {
                field,
                value: new_value.to_string(),
                reason: format!("changes where {other} is matched"),
            });
        }

        tracing::debug!("Replaced {field} value '{}' with '{new_value}'", found.value());
        Ok(patched)
    }

    /// Value and dialect `field` resolves to, if it is located at all.
    fn resolved<'t>(&self, text: &'t str, field: Field) -> Option<(&'t str, &'static str)> {
        self.locate(text, field)
            .ok()
            .map(|m| (m.value(), m.dialect()))
    }

    /// Performs the installation-time validation of a constants file.
    ///
    /// The service control URL must be present and an absolute URI, and the
    /// version must be present.
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered.
    pub fn check(&self, text: &str) -> Result<CheckedConstants, PatchError> {
        let service_control_url = validate_uri(self.extract(text, Field::ServiceControlUrl)?)?;
        let version = self.extract(text, Field::Version)?.to_string();

        Ok(CheckedConstants {
            service_control_url,
            version,
        })
    }
}

/// Field values of a constants file that passed [`FieldMatcher::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedConstants {
    /// Parsed service control URL
    pub service_control_url: Url,
    /// Version string, possibly empty
    pub version: String,
}
