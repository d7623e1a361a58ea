//! Absolute URI validation for URL-valued fields.

use url::Url;

use super::PatchError;

/// Validates that `value` is an absolute URI with a scheme and a host.
///
/// Used both as a sanity check after extraction and as the acceptance gate
/// before a replacement URL is spliced into a file.
///
/// # Errors
///
/// Returns [`PatchError::InvalidUri`] if the value does not parse as an
/// absolute URI or has no host.
///
/// # Examples
///
/// ```
/// use app_constants_patch::patch::validate_uri;
///
/// assert!(validate_uri("http://host.example.com:33333/api/").is_ok());
/// assert!(validate_uri("not a url").is_err());
/// ```
pub fn validate_uri(value: &str) -> Result<Url, PatchError> {
    let url = Url::parse(value).map_err(|e| PatchError::InvalidUri {
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    if url.host().is_none() {
        return Err(PatchError::InvalidUri {
            value: value.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(url)
}
