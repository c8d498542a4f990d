//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
}

impl AppState {
    /// Builds state around an initialized storage backend.
    pub fn new(repository: Arc<dyn LinkRepository>, base_prefix: impl Into<String>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository, base_prefix)),
        }
    }
}
