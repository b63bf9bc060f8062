//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored URL record.
///
/// Records are created once and never mutated. `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, short_code: String, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_code,
            long_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl NewLink {
    /// Stamps a new record with the current time.
    pub fn now(short_code: String, long_url: String) -> Self {
        Self {
            short_code,
            long_url,
            created_at: Utc::now(),
        }
    }
}
