//! Domain layer containing the entity and the storage contract.
//!
//! - [`entities`] - The [`entities::ShortLink`] record
//! - [`repositories`] - The [`repositories::LinkRepository`] trait and its error type
//!
//! The domain layer has no dependency on HTTP or on any particular database.

pub mod entities;
pub mod repositories;
