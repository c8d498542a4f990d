//! Utility functions for code generation and URL handling.
//!
//! - [`code_generator`] - Base-62 short codes derived from sequence ids
//! - [`url_validator`] - URL trimming and validation

pub mod code_generator;
pub mod url_validator;
