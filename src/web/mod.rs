//! Web layer: the HTML form, the shorten submission, and the redirect.
//!
//! Pages are rendered server-side with Askama.
//!
//! # Modules
//!
//! - [`forms`] - Form payloads and their validation
//! - [`handlers`] - Endpoint handlers
//! - [`routes`] - Route configuration
//! - [`templates`] - Template definitions and rendering

pub mod forms;
pub mod handlers;
pub mod routes;
pub mod templates;
