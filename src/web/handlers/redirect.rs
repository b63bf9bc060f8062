//! Handler for short URL redirect.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request::short_code_from_path;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /r/{code}`
///
/// The code is the third `/`-separated segment of the path; anything after it
/// is ignored.
///
/// # Errors
///
/// Returns 400 `Invalid URL` if the path carries no code.
/// Returns 404 `URL not found` if the code is unknown.
/// Returns 500 on storage errors.
pub async fn redirect_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    let short_code = short_code_from_path(uri.path()).ok_or(AppError::InvalidPath)?;

    let link = state.link_service.get_link_by_code(short_code).await?;

    let location = HeaderValue::from_str(&link.long_url).map_err(|_| {
        AppError::internal(format!("stored URL for {short_code} is not a valid header value"))
    })?;

    tracing::debug!(%short_code, "Redirecting");

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
