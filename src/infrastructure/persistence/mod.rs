//! SQLite repository implementations.
//!
//! # Contents
//!
//! - [`open_pool`] - Opens (or creates) the database file and applies migrations
//! - [`SqliteLinkRepository`] - URL record storage and lookup

pub mod database;
pub mod sqlite_link_repository;

pub use database::open_pool;
pub use sqlite_link_repository::SqliteLinkRepository;
