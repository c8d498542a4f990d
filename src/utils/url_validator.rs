//! Validation of URLs submitted for shortening.
//!
//! Input is trimmed and checked, but otherwise stored exactly as given so a
//! lookup always returns the same string that was submitted.

use url::Url;

/// Upper bound on accepted URL length, in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL is Empty")]
    Empty,

    #[error("URL is too long ({0} bytes, max {MAX_URL_LENGTH})")]
    TooLong(usize),

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Trims `input` and checks that it is a usable redirect target.
///
/// # Rules
///
/// 1. Surrounding whitespace is removed
/// 2. The result must be non-empty and at most [`MAX_URL_LENGTH`] bytes
/// 3. It must not contain control characters, which cannot appear in a
///    `Location` header
/// 4. It must parse as an absolute URL with an `http` or `https` scheme
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] rule that fails.
///
/// # Examples
///
/// ```
/// use shortlink::utils::url_validator::validate_url;
///
/// assert_eq!(
///     validate_url("  https://example.com/a  ").unwrap(),
///     "https://example.com/a"
/// );
/// assert!(validate_url("   ").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if trimmed.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong(trimmed.len()));
    }

    if trimmed.chars().any(char::is_control) {
        return Err(UrlValidationError::InvalidFormat(
            "URL must not contain control characters".to_string(),
        ));
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::InvalidFormat(
            "URL must include a host".to_string(),
        ));
    }

    Ok(trimmed.to_string())
}
