//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Process-wide handles, cloned cheaply per request.
///
/// Built once at startup; the store inside `link_service` is closed at
/// shutdown.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    /// Configured public origin for short URLs, if any.
    pub base_url: Option<Arc<str>>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<SqliteLinkRepository>>, base_url: Option<String>) -> Self {
        Self {
            link_service,
            base_url: base_url.map(Arc::from),
        }
    }
}
