//! Error taxonomy for storage backends.

use thiserror::Error;

/// Result type for repository operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors surfaced by a [`super::LinkRepository`] implementation.
///
/// `NotFound` is an expected outcome of a lookup, not a fault.
/// `Configuration` and `Connection` are only produced while initializing
/// a backend and are fatal to startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("short link not found: {code}")]
    NotFound { code: String },

    #[error("storage query failed: {0}")]
    Query(String),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("storage operation timed out: {0}")]
    Timeout(String),

    #[error("stored data is invalid: {0}")]
    InvalidData(String),

    #[error("storage has been closed")]
    Closed,

    #[error("invalid storage configuration: {0}")]
    Configuration(String),

    #[error("failed to connect to storage: {0}")]
    Connection(String),
}

impl StorageError {
    /// Creates a [`StorageError::NotFound`] for `code`.
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    /// Returns `true` for failures that may succeed on a retry.
    ///
    /// Only read operations act on this.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Unavailable(_))
    }
}
