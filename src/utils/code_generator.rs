//! Short code derivation from backend-assigned sequence ids.
//!
//! Codes are the positional base-62 representation of the id, so two distinct
//! ids can never produce the same code and no collision retry is needed.
//! The trade-off is that codes reveal approximate insertion order.

/// Digits, then uppercase, then lowercase letters. None of them need
/// percent-encoding in a URL path.
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const BASE: u64 = ALPHABET.len() as u64;

/// Longest code `encode` can produce (`u64::MAX` is 11 base-62 digits).
pub const MAX_CODE_LENGTH: usize = 11;

/// Codes that would be shadowed by fixed routes (`GET /health`,
/// `POST /encode`). Backends skip the ids that encode to them.
pub const RESERVED_CODES: &[&str] = &["encode", "health"];

/// Encodes a sequence id as a base-62 short code.
///
/// Id `0` encodes to `"0"`, so the result is never empty.
///
/// # Examples
///
/// ```
/// use shortlink::utils::code_generator::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut id: u64) -> String {
    if id == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(MAX_CODE_LENGTH);
    while id > 0 {
        digits.push(ALPHABET[(id % BASE) as usize]);
        id /= BASE;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

/// Decodes a short code back into its sequence id.
///
/// Returns `None` for empty input, characters outside the alphabet,
/// leading zeros (which `encode` never emits) and values beyond `u64`.
pub fn decode(code: &str) -> Option<u64> {
    if code.is_empty() || code.len() > MAX_CODE_LENGTH {
        return None;
    }
    if code.len() > 1 && code.starts_with('0') {
        return None;
    }

    code.bytes().try_fold(0u64, |acc, byte| {
        let digit = digit_value(byte)?;
        acc.checked_mul(BASE)?.checked_add(digit)
    })
}

/// Returns `true` if `code` could have been produced by [`encode`].
pub fn is_valid_code(code: &str) -> bool {
    decode(code).is_some()
}

/// Returns `true` if `code` collides with a fixed route and must never be
/// handed out.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

fn digit_value(byte: u8) -> Option<u64> {
    match byte {
        b'0'..=b'9' => Some(u64::from(byte - b'0')),
        b'A'..=b'Z' => Some(u64::from(byte - b'A') + 10),
        b'a'..=b'z' => Some(u64::from(byte - b'a') + 36),
        _ => None,
    }
}
