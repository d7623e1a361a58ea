//! Multi-field patches applied as a single all-or-nothing edit.

use super::matcher::check_replacement;
use super::{Field, FieldMatcher, PatchError, validate_uri};

/// A set of field assignments to apply to one constants file.
///
/// Values are validated before the text is searched, so an invalid URL is
/// reported without looking at the file at all. [`PatchSet::apply`] returns
/// the fully rewritten text or an error, never a partially patched buffer.
///
/// # Examples
///
/// ```
/// use app_constants_patch::patch::{Field, FieldMatcher, PatchSet};
///
/// let text = "window.defaultConfig = { version: '1.20.0', service_control_url: 'http://localhost:33333/api/' };";
///
/// let patched = PatchSet::new()
///     .with(Field::ServiceControlUrl, "http://sc.example.com:33333/api/")
///     .with(Field::Version, "1.21.0")
///     .apply(&FieldMatcher::default(), text)
///     .unwrap();
///
/// assert!(patched.contains("version: '1.21.0'"));
/// assert!(patched.contains("service_control_url: 'http://sc.example.com:33333/api/'"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchSet {
    assignments: Vec<(Field, String)>,
}

impl PatchSet {
    /// Creates an empty patch set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `value` to `field`, replacing any earlier assignment.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(slot) = self.assignments.iter_mut().find(|(f, _)| *f == field) {
            slot.1 = value;
        } else {
            self.assignments.push((field, value));
        }
        self
    }

    /// Returns the value assigned to `field`, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.assignments
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the assignments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.assignments.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Returns true if no field is assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Returns the number of assigned fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Validates the assigned values without consulting any file.
    ///
    /// URL-valued fields must be absolute URIs; no value may contain a line
    /// break or backslash. Quote checks need the matched file and happen in
    /// [`PatchSet::apply`].
    ///
    /// # Errors
    ///
    /// Returns the first invalid assignment.
    pub fn validate(&self) -> Result<(), PatchError> {
        self.iter()
            .try_for_each(|(field, value)| Self::validate_value(field, value))
    }

    /// Validates a single value for `field`, as [`PatchSet::validate`] does.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::IllegalReplacementValue`] for line breaks and
    /// backslashes, and [`PatchError::InvalidUri`] for URL fields that are not absolute URIs.
    pub fn validate_value(field: Field, value: &str) -> Result<(), PatchError> {
        check_replacement(field, value, None)?;
        if field.requires_uri() {
            validate_uri(value)?;
        }
        Ok(())
    }

    /// Applies every assignment to `text`.
    ///
    /// # Errors
    ///
    /// Returns the first validation, lookup, or replacement failure; in that
    /// case no rewritten text is produced.
    pub fn apply(&self, matcher: &FieldMatcher<'_>, text: &str) -> Result<String, PatchError> {
        self.validate()?;

        let mut patched = text.to_string();
        for (field, value) in self.iter() {
            patched = matcher.replace(&patched, field, value)?;
        }

        Ok(patched)
    }
}
