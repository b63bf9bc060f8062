//! Domain layer: the link entity and the repository contract.
//!
//! # Modules
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP or SQLite. Concrete storage lives
//! in [`crate::infrastructure::persistence`], orchestration in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
