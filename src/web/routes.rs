//! Public route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    index_handler, method_not_allowed_handler, redirect_handler, shorten_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `GET  /`         - URL input form
/// - `POST /shorten`  - Create a short link and show it
/// - `GET  /r/{code}` - 301 redirect to the stored URL
///
/// Any other method on these paths answers 405. `/r` and `/r/` are routed so
/// that a missing code answers 400 rather than 404.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler).fallback(method_not_allowed_handler))
        .route(
            "/shorten",
            post(shorten_handler).fallback(method_not_allowed_handler),
        )
        .route("/r", get(redirect_handler).fallback(method_not_allowed_handler))
        .route("/r/", get(redirect_handler).fallback(method_not_allowed_handler))
        .route(
            "/r/{*code}",
            get(redirect_handler).fallback(method_not_allowed_handler),
        )
}
