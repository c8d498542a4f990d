//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod encode;
pub mod health;
pub mod info;
pub mod redirect;

pub use encode::encode_handler;
pub use health::health_handler;
pub use info::info_handler;
pub use redirect::redirect_handler;
