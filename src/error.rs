//! Error taxonomy for the HTTP surface and the store.
//!
//! [`StoreError`] is what repositories return; [`AppError`] is what handlers
//! return and knows how to turn itself into a response. Internal details are
//! logged but never sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures reported by link repositories.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The short code is already taken by another record.
    #[error("short code already exists")]
    UniqueViolation,

    /// No record matches the requested short code.
    #[error("record not found")]
    NotFound,

    /// Any other backend failure (I/O, schema, pool).
    #[error("storage error: {0}")]
    Storage(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            e if is_unique_violation(&e) => StoreError::UniqueViolation,
            e => StoreError::Storage(e),
        }
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid URL format")]
    InvalidUrl,

    #[error("malformed redirect path")]
    InvalidPath,

    #[error("missing or invalid Host header")]
    MissingHost,

    #[error("URL not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("route not found")]
    RouteNotFound,

    #[error(transparent)]
    Storage(StoreError),

    #[error("template render failed: {0}")]
    Render(#[from] askama::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl | AppError::InvalidPath | AppError::MissingHost => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Storage(_) | AppError::Render(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Plain-text body sent to the client.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidUrl => "Invalid URL format",
            AppError::InvalidPath => "Invalid URL",
            AppError::MissingHost => "Missing Host header",
            AppError::NotFound => "URL not found",
            AppError::MethodNotAllowed => "Method not allowed",
            AppError::RouteNotFound => "Not found",
            AppError::Storage(_) | AppError::Render(_) | AppError::Internal(_) => {
                "Internal Server Error"
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => AppError::NotFound,
            other => AppError::Storage(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, self.public_message()).into_response()
    }
}
