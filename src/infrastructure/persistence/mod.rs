//! Storage backend implementations.
//!
//! # Backends
//!
//! - [`PgLinkRepository`] - PostgreSQL, the production backend
//! - [`MemoryLinkRepository`] - in-process map for tests and development
//!
//! [`init_storage`] picks one at startup from [`StorageConfig`] and hands it
//! out as a trait object, so callers never name a concrete backend.

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;

use std::sync::Arc;

use crate::config::{StorageBackendKind, StorageConfig};
use crate::domain::repositories::{LinkRepository, StorageResult};

/// Initializes the configured storage backend.
///
/// # Errors
///
/// Returns `Configuration` or `Connection` errors from the backend's init.
pub async fn init_storage(config: &StorageConfig) -> StorageResult<Arc<dyn LinkRepository>> {
    let repository: Arc<dyn LinkRepository> = match config.backend {
        StorageBackendKind::Postgres => Arc::new(PgLinkRepository::init(&config.database).await?),
        StorageBackendKind::Memory => Arc::new(MemoryLinkRepository::new()),
    };

    tracing::info!("Storage ready ({})", repository.backend_name());
    Ok(repository)
}
