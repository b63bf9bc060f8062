//! # Quicklink
//!
//! A small URL shortener: paste a long URL into a form, get back
//! `http://{host}/r/{code}`, and that short URL answers with a 301 to the
//! original. Records live in an embedded SQLite file.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The link entity and repository trait
//! - **Application Layer** ([`application`]) - Shortening and resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **Web Layer** ([`web`]) - Handlers, forms, and Askama templates
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: override defaults
//! export DATABASE_PATH="urlshortener.db"
//! export LISTEN="0.0.0.0:8080"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod middleware;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::{AppError, StoreError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::{AppError, StoreError};
    pub use crate::state::AppState;
}
