//! Long URL acceptance check.
//!
//! The check is a case-sensitive scheme prefix test and nothing more: the
//! service stores whatever the visitor typed once it starts with `http://` or
//! `https://`.

use std::borrow::Cow;

use validator::ValidationError;

use crate::error::AppError;

/// Schemes a long URL may start with.
const ALLOWED_PREFIXES: &[&str] = &["http://", "https://"];

/// Validation error code reported for a rejected long URL.
pub const INVALID_URL_CODE: &str = "invalid_url";

/// Returns true if `long_url` starts with an allowed scheme prefix.
pub fn is_valid_url(long_url: &str) -> bool {
    ALLOWED_PREFIXES
        .iter()
        .any(|prefix| long_url.starts_with(prefix))
}

/// Validates a submitted long URL.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] if the URL does not start with `http://`
/// or `https://`.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com").is_ok());
/// assert!(validate_url("ftp://example.com").is_err());
/// ```
pub fn validate_url(long_url: &str) -> Result<(), AppError> {
    if is_valid_url(long_url) {
        Ok(())
    } else {
        Err(AppError::InvalidUrl)
    }
}

/// Field validator for form DTOs.
pub fn validate_long_url_field(long_url: &str) -> Result<(), ValidationError> {
    if is_valid_url(long_url) {
        return Ok(());
    }

    Err(ValidationError::new(INVALID_URL_CODE)
        .with_message(Cow::Borrowed("URL must start with http:// or https://")))
}
