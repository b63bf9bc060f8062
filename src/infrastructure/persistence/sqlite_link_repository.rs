//! SQLite implementation of link repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::StoreError;

/// SQLite repository for URL records.
///
/// Uses bound parameters for every statement. The pool is shared, so clones
/// of the `Arc` observe each other's writes.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO urls (short_code, long_url, created_at)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&new_link.short_code)
        .bind(&new_link.long_url)
        .bind(new_link.created_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(Link::new(
            result.last_insert_rowid(),
            new_link.short_code,
            new_link.long_url,
            new_link.created_at,
        ))
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Link, StoreError> {
        sqlx::query_as::<_, Link>(
            r#"
            SELECT id, short_code, long_url, created_at
            FROM urls
            WHERE short_code = ?1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
