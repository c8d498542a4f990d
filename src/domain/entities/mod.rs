//! Core domain entities.
//!
//! - [`ShortLink`] - A persisted code-to-URL mapping, the only entity in the service

pub mod link;

pub use link::ShortLink;
