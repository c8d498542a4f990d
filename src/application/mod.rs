//! Application layer services implementing business logic.
//!
//! Services consume the repository trait and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and lookup

pub mod services;
