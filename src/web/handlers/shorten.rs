//! Handler for the shorten form submission.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::{HeaderMap, Uri},
    response::Html,
};
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request::public_origin;
use crate::web::forms::ShortenForm;
use crate::web::templates::{SuccessTemplate, render};

/// Creates a short link from the submitted form and renders the success page.
///
/// # Endpoint
///
/// `POST /shorten` with form field `long_url`
///
/// # Request Flow
///
/// 1. Parse the form body (an unreadable body counts as an empty `long_url`)
/// 2. Validate the URL prefix
/// 3. Resolve the public origin from `BASE_URL` or the `Host` header
/// 4. Insert under a fresh short code, retrying on collisions
/// 5. Render `success.html` with `{origin}/r/{code}`
///
/// # Errors
///
/// Returns 400 `Invalid URL format` if validation fails.
/// Returns 400 if no host can be determined.
/// Returns 500 on storage or render failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(form) = form.unwrap_or_else(|rejection| {
        tracing::debug!(%rejection, "Unreadable shorten form");
        Form(ShortenForm::default())
    });

    form.validate()?;

    let origin = public_origin(state.base_url.as_deref(), &headers, &uri)?;

    let link = state.link_service.create_short_link(form.long_url).await?;
    let short_url = state
        .link_service
        .get_short_url(&origin, &link.short_code);

    tracing::info!(short_code = %link.short_code, "Short link created");

    render(&SuccessTemplate { short_url })
}
