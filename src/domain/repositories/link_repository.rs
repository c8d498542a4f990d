//! Storage contract for short links.

use crate::domain::entities::ShortLink;
use crate::domain::repositories::StorageResult;
use async_trait::async_trait;

/// Capability interface between the HTTP layer and a persistence backend.
///
/// Backends are constructed through their own `init` function, which acquires
/// connections and verifies the schema. Once constructed they are ready; after
/// [`close`](Self::close) every call fails with
/// [`StorageError::Closed`](crate::domain::repositories::StorageError::Closed).
///
/// Implementations must be safe to call from many requests at once. Sequence
/// ids are assigned by the backend's own atomic primitive, which is what keeps
/// codes unique.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Persists `url` under a freshly derived code and returns the new record.
    ///
    /// Saving the same URL twice creates two records with different codes.
    /// A save either commits completely or leaves no record behind.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Validation`] if `url` is empty or whitespace.
    /// Returns a backend error (`Query`, `Unavailable`, `Timeout`, ...) when the
    /// write fails. Saves are never retried.
    ///
    /// [`StorageError::Validation`]: crate::domain::repositories::StorageError::Validation
    async fn save(&self, url: &str) -> StorageResult<ShortLink>;

    /// Resolves `code` to its record for redirecting.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] when no record has exactly this code.
    ///
    /// [`StorageError::NotFound`]: crate::domain::repositories::StorageError::NotFound
    async fn load(&self, code: &str) -> StorageResult<ShortLink>;

    /// Resolves `code` to its full record for inspection.
    ///
    /// Same contract as [`load`](Self::load).
    async fn load_info(&self, code: &str) -> StorageResult<ShortLink>;

    /// Checks that the backend can serve requests.
    async fn health_check(&self) -> StorageResult<()>;

    /// Releases backend resources.
    ///
    /// Closing twice is a no-op.
    async fn close(&self) -> StorageResult<()>;

    /// Short human-readable backend name for logs and health output.
    fn backend_name(&self) -> &'static str;
}
