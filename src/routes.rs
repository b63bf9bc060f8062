//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - URL input form
//! - `POST /shorten`  - Shorten submission
//! - `GET  /r/{code}` - Short link redirect
//!
//! Unknown paths answer 404 `Not found`.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    web::routes::public_routes()
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}
