#![allow(dead_code)]

use axum_test::TestServer;
use quicklink::application::services::LinkService;
use quicklink::infrastructure::persistence::{SqliteLinkRepository, open_pool};
use quicklink::routes::app_router;
use quicklink::state::AppState;
use quicklink::utils::code_generator::ShortCodeGenerator;
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_HOST: &str = "s.example.com";

/// A database file in a private temp directory, removed on drop.
pub struct TestDb {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("urlshortener.db");
        Self { dir, path }
    }

    pub async fn pool(&self) -> SqlitePool {
        open_pool(&self.path, 2).await.unwrap()
    }
}

pub fn create_test_state(pool: SqlitePool, base_url: Option<&str>) -> AppState {
    let link_repo = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    let link_service = Arc::new(LinkService::new(
        link_repo,
        Arc::new(ShortCodeGenerator::new()),
    ));

    AppState::new(link_service, base_url.map(str::to_string))
}

pub fn create_test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(app_router(create_test_state(pool, None))).unwrap()
}

pub async fn insert_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short_code, long_url, created_at) VALUES (?1, ?2, ?3)")
        .bind(code)
        .bind(url)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Pulls the short code out of a rendered success page.
pub fn extract_short_code(html: &str, host: &str) -> String {
    let pattern = format!(r"http://{}/r/([A-Za-z0-9]{{6}})", regex::escape(host));
    let re = regex::Regex::new(&pattern).unwrap();

    re.captures(html)
        .unwrap_or_else(|| panic!("no short URL for {host} in page:\n{html}"))[1]
        .to_string()
}
