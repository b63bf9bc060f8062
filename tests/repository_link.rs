mod common;

use common::TestDb;
use quicklink::domain::entities::NewLink;
use quicklink::domain::repositories::LinkRepository;
use quicklink::error::StoreError;
use quicklink::infrastructure::persistence::SqliteLinkRepository;
use std::sync::Arc;

#[tokio::test]
async fn test_insert_link() {
    let db = TestDb::new();
    let repo = SqliteLinkRepository::new(Arc::new(db.pool().await));

    let new_link = NewLink::now("aB3xY9".to_string(), "https://example.com".to_string());
    let created_at = new_link.created_at;

    let link = repo.insert(new_link).await.unwrap();

    assert!(link.id > 0);
    assert_eq!(link.short_code, "aB3xY9");
    assert_eq!(link.long_url, "https://example.com");
    assert_eq!(link.created_at, created_at);
}

#[tokio::test]
async fn test_find_by_code_returns_same_record() {
    let db = TestDb::new();
    let repo = SqliteLinkRepository::new(Arc::new(db.pool().await));

    let long_url = "https://example.com/a path/ü?q=1&r=ä#frag".to_string();
    let inserted = repo
        .insert(NewLink::now("Zz09aA".to_string(), long_url.clone()))
        .await
        .unwrap();

    let found = repo.find_by_code("Zz09aA").await.unwrap();

    assert_eq!(found.id, inserted.id);
    assert_eq!(found.short_code, "Zz09aA");
    assert_eq!(found.long_url, long_url);
    assert!((found.created_at - inserted.created_at).num_seconds().abs() < 1);
}

#[tokio::test]
async fn test_find_by_code_not_found() {
    let db = TestDb::new();
    let repo = SqliteLinkRepository::new(Arc::new(db.pool().await));

    let result = repo.find_by_code("abcdef").await;

    assert!(matches!(result, Err(StoreError::NotFound)));
}

#[tokio::test]
async fn test_find_by_code_is_case_sensitive() {
    let db = TestDb::new();
    let pool = db.pool().await;
    common::insert_link(&pool, "abcdef", "https://example.com").await;

    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert!(repo.find_by_code("abcdef").await.is_ok());
    assert!(matches!(
        repo.find_by_code("ABCDEF").await,
        Err(StoreError::NotFound)
    ));
}

#[tokio::test]
async fn test_duplicate_code_is_unique_violation() {
    let db = TestDb::new();
    let repo = SqliteLinkRepository::new(Arc::new(db.pool().await));

    repo.insert(NewLink::now("dup123".into(), "https://one.example".into()))
        .await
        .unwrap();

    let result = repo
        .insert(NewLink::now("dup123".into(), "https://two.example".into()))
        .await;

    assert!(matches!(result, Err(StoreError::UniqueViolation)));

    let kept = repo.find_by_code("dup123").await.unwrap();
    assert_eq!(kept.long_url, "https://one.example");
}

#[tokio::test]
async fn test_ids_increase() {
    let db = TestDb::new();
    let repo = SqliteLinkRepository::new(Arc::new(db.pool().await));

    let first = repo
        .insert(NewLink::now("first1".into(), "https://example.com".into()))
        .await
        .unwrap();
    let second = repo
        .insert(NewLink::now("second".into(), "https://example.com".into()))
        .await
        .unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_open_is_idempotent_and_durable() {
    let db = TestDb::new();

    {
        let repo = SqliteLinkRepository::new(Arc::new(db.pool().await));
        repo.insert(NewLink::now("keep01".into(), "https://example.com/kept".into()))
            .await
            .unwrap();
        repo.close().await;
    }

    let repo = SqliteLinkRepository::new(Arc::new(db.pool().await));
    let link = repo.find_by_code("keep01").await.unwrap();

    assert_eq!(link.long_url, "https://example.com/kept");
}

#[tokio::test]
async fn test_opens_table_created_without_migrations() {
    let db = TestDb::new();

    {
        let options = sqlx::sqlite::SqliteConnectOptions::new()
            .filename(&db.path)
            .create_if_missing(true);
        let pool = sqlx::SqlitePool::connect_with(options).await.unwrap();
        sqlx::query(
            "CREATE TABLE urls (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                short_code TEXT NOT NULL UNIQUE,
                long_url TEXT NOT NULL,
                created_at DATETIME NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .unwrap();
        common::insert_link(&pool, "legacy", "https://example.com/old").await;
        pool.close().await;
    }

    let repo = SqliteLinkRepository::new(Arc::new(db.pool().await));
    let link = repo.find_by_code("legacy").await.unwrap();

    assert_eq!(link.long_url, "https://example.com/old");
}

#[tokio::test]
async fn test_operations_after_close_fail() {
    let db = TestDb::new();
    let repo = SqliteLinkRepository::new(Arc::new(db.pool().await));

    repo.close().await;

    let result = repo.find_by_code("abcdef").await;
    assert!(matches!(result, Err(StoreError::Storage(_))));
}

#[tokio::test]
async fn test_open_fails_for_unwritable_location() {
    let db = TestDb::new();
    let path = db.dir.path().join("missing-dir").join("urlshortener.db");

    let result = quicklink::infrastructure::persistence::open_pool(&path, 1).await;

    assert!(matches!(result, Err(StoreError::Storage(_))));
}
