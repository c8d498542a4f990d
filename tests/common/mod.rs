#![allow(dead_code)]

pub mod contract;

use axum_test::TestServer;
use shortlink::domain::repositories::LinkRepository;
use shortlink::infrastructure::persistence::MemoryLinkRepository;
use shortlink::routes::router;
use shortlink::state::AppState;
use std::sync::Arc;

pub const TEST_PREFIX: &str = "http://sho.rt/";

pub fn create_test_storage() -> Arc<MemoryLinkRepository> {
    Arc::new(MemoryLinkRepository::new())
}

pub fn create_test_state(storage: Arc<MemoryLinkRepository>) -> AppState {
    let storage: Arc<dyn LinkRepository> = storage;
    AppState::new(storage, TEST_PREFIX)
}

/// Full router (routes, fallbacks, middleware) over an in-memory backend.
pub fn create_test_server() -> (TestServer, Arc<MemoryLinkRepository>) {
    let storage = create_test_storage();
    let app = router(create_test_state(storage.clone()));
    (TestServer::new(app).unwrap(), storage)
}

pub async fn create_test_link(storage: &MemoryLinkRepository, url: &str) -> String {
    storage.save(url).await.unwrap().code
}
