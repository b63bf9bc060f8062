//! Helpers for reading request metadata.

use axum::http::{HeaderMap, Uri, header};

use crate::error::AppError;

/// Returns the origin (`scheme://host[:port]`) short URLs are built on.
///
/// A configured public base URL wins. Otherwise the scheme is `http` and the
/// authority is the request's `Host` header (falling back to the URI
/// authority for HTTP/2 requests), port included.
///
/// # Errors
///
/// Returns [`AppError::MissingHost`] if no base URL is configured and the
/// request carries no usable host.
pub fn public_origin(
    base_url: Option<&str>,
    headers: &HeaderMap,
    uri: &Uri,
) -> Result<String, AppError> {
    if let Some(base) = base_url {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let host = match headers.get(header::HOST) {
        Some(value) => value.to_str().map_err(|_| AppError::MissingHost)?,
        None => uri
            .authority()
            .map(|a| a.as_str())
            .ok_or(AppError::MissingHost)?,
    };

    if host.is_empty() {
        return Err(AppError::MissingHost);
    }

    Ok(format!("http://{host}"))
}

/// Extracts the short code from a redirect path such as `/r/aB3xY9`.
///
/// The path is split on `/`; the code is the third segment. Returns `None`
/// when there are fewer than three segments or the third is empty.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(short_code_from_path("/r/aB3xY9"), Some("aB3xY9"));
/// assert_eq!(short_code_from_path("/r/"), None);
/// ```
pub fn short_code_from_path(path: &str) -> Option<&str> {
    path.split('/').nth(2).filter(|code| !code.is_empty())
}
