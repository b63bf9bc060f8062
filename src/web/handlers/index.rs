//! Landing page handler.

use axum::response::Html;

use crate::error::AppError;
use crate::web::templates::{IndexTemplate, render};

/// Renders the URL input form.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Result<Html<String>, AppError> {
    render(&IndexTemplate {})
}
