//! Askama templates for the two HTML pages.
//!
//! Templates are compiled into the binary from `templates/`; a syntax error
//! is a build failure rather than a runtime one.

use askama::Template;
use axum::response::Html;

use crate::error::AppError;

/// Landing page with the URL input form.
///
/// Renders `templates/index.html`: one text input named `long_url` posting to
/// `/shorten`.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// Page shown after a successful submission.
///
/// Renders `templates/success.html` with the short URL as its only datum.
#[derive(Template)]
#[template(path = "success.html")]
pub struct SuccessTemplate {
    pub short_url: String,
}

/// Renders a template to a complete HTML body.
///
/// Rendering finishes before the response starts, so a failure can still be
/// answered with a 500.
///
/// # Errors
///
/// Returns [`AppError::Render`] if template execution fails.
pub fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    Ok(Html(template.render()?))
}
