//! SQLite connection bootstrap.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::path::Path;
use std::time::Duration;

use crate::error::StoreError;

/// Opens the database file at `path`, creating it if missing, and applies
/// the embedded migrations.
///
/// Safe to call against an existing database: the schema statements are
/// idempotent.
///
/// # Errors
///
/// Returns [`StoreError::Storage`] if the file cannot be opened or the schema
/// cannot be applied.
pub async fn open_pool(path: impl AsRef<Path>, max_connections: u32) -> Result<SqlitePool, StoreError> {
    let path = path.as_ref();

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        // Writers serialize inside SQLite; wait instead of failing with "database is locked".
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(StoreError::Storage)?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| StoreError::Storage(sqlx::Error::Migrate(Box::new(e))))?;

    tracing::info!(path = %path.display(), "Database ready");

    Ok(pool)
}
