//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new record and returns it with its assigned id.
    ///
    /// A successful insert is visible to every later [`Self::find_by_code`]
    /// call in the same process.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] if the short code is taken.
    /// Returns [`StoreError::Storage`] on any other database error.
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Finds the record for a short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record matches.
    /// Returns [`StoreError::Storage`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Link, StoreError>;

    /// Releases the underlying database handle.
    ///
    /// Operations after `close` fail with [`StoreError::Storage`].
    async fn close(&self);
}
