//! In-memory implementation of the link repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::debug;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{LinkRepository, StorageError, StorageResult};
use crate::utils::code_generator;

/// Process-local link storage.
///
/// Intended for tests and development. The sequence counter and the record map
/// share one [`RwLock`], so id assignment and insert happen atomically under
/// the same write guard. Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    links: HashMap<String, ShortLink>,
    closed: bool,
}

impl MemoryLinkRepository {
    /// Creates an empty repository. The first saved link gets id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty repository whose sequence starts at `first_id`.
    pub fn with_first_id(first_id: u64) -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: first_id,
                ..Inner::default()
            }),
        }
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.inner.read().links.len()
    }

    /// Returns `true` if no links are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, code: &str) -> StorageResult<ShortLink> {
        let inner = self.inner.read();
        if inner.closed {
            return Err(StorageError::Closed);
        }

        inner
            .links
            .get(code)
            .cloned()
            .ok_or_else(|| StorageError::not_found(code))
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn save(&self, url: &str) -> StorageResult<ShortLink> {
        let url = url.trim();
        if url.is_empty() {
            return Err(StorageError::Validation("url must not be empty".into()));
        }

        let mut inner = self.inner.write();
        if inner.closed {
            return Err(StorageError::Closed);
        }

        let mut seq = inner.next_id;
        let mut code = code_generator::encode(seq);
        while code_generator::is_reserved(&code) {
            seq += 1;
            code = code_generator::encode(seq);
        }
        let id = i64::try_from(seq)
            .map_err(|_| StorageError::Query("sequence exhausted".to_string()))?;

        if inner.links.contains_key(&code) {
            return Err(StorageError::Query(format!(
                "duplicate key value violates unique constraint on code '{code}'"
            )));
        }

        let link = ShortLink::new(id, code.clone(), url.to_string(), Utc::now());
        inner.links.insert(code, link.clone());
        inner.next_id = seq + 1;

        debug!(id = link.id, code = %link.code, "Saved link in memory");
        Ok(link)
    }

    async fn load(&self, code: &str) -> StorageResult<ShortLink> {
        self.lookup(code)
    }

    async fn load_info(&self, code: &str) -> StorageResult<ShortLink> {
        self.lookup(code)
    }

    async fn health_check(&self) -> StorageResult<()> {
        if self.inner.read().closed {
            return Err(StorageError::Closed);
        }
        Ok(())
    }

    async fn close(&self) -> StorageResult<()> {
        let mut inner = self.inner.write();
        if !inner.closed {
            inner.closed = true;
            debug!(links = inner.links.len(), "Closed in-memory storage");
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
