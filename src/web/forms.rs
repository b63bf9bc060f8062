//! Form payloads posted by the HTML pages.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;
use crate::utils::url_validator::{INVALID_URL_CODE, validate_long_url_field};

/// Body of `POST /shorten` (`application/x-www-form-urlencoded`).
///
/// A missing `long_url` field deserializes as an empty string, which then
/// fails validation like any other malformed URL.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ShortenForm {
    #[serde(default)]
    #[validate(custom(function = "validate_long_url_field"))]
    pub long_url: String,
}

impl From<ValidationErrors> for AppError {
    /// A rejected `long_url` is the visitor's fault (400); any other
    /// validation failure is ours (500).
    fn from(errors: ValidationErrors) -> Self {
        let url_rejected = errors
            .field_errors()
            .get("long_url")
            .is_some_and(|errs| errs.iter().any(|e| e.code == INVALID_URL_CODE));

        if url_rejected {
            AppError::InvalidUrl
        } else {
            AppError::internal(format!("unexpected form validation failure: {errors}"))
        }
    }
}
