//! Repository trait definitions for the domain layer.
//!
//! The storage abstraction is a single trait, [`LinkRepository`]. Concrete
//! backends live in `crate::infrastructure::persistence`; a mock is generated
//! via `mockall` for unit tests.
//!
//! # Testing
//!
//! See `tests/storage_contract.rs` and `tests/repository_postgres.rs`.

pub mod error;
pub mod link_repository;

pub use error::{StorageError, StorageResult};
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
