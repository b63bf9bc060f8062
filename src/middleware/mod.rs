//! Request processing middleware.
//!
//! - [`tracing`] - Per-request spans and response logging

pub mod tracing;
