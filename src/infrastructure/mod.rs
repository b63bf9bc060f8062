//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer on top of an
//! embedded SQLite database.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite connection setup and repository implementations

pub mod persistence;
