//! Utility functions for code generation, URL checks, and request handling.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Long URL acceptance check
//! - [`request`] - Host and path extraction from HTTP requests

pub mod code_generator;
pub mod request;
pub mod url_validator;
