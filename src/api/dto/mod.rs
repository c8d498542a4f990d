//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Request bodies
//! carry raw input; validation happens in the link service.

pub mod encode;
pub mod envelope;
pub mod health;
pub mod info;
