//! Responses for requests no endpoint accepts.

use crate::error::AppError;

/// Answers a known path requested with the wrong method (405).
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}

/// Answers a path no route matches (404).
pub async fn not_found_handler() -> AppError {
    AppError::RouteNotFound
}
