//! Log sanitization utilities
//!
//! Keeps API tokens and large response bodies (long TXT/DKIM values, full
//! record listings) out of debug and error logs.

/// Maximum number of bytes of a body to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret that stay visible.
const SECRET_VISIBLE_PREFIX: usize = 4;

fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned unchanged; longer ones keep their first
/// `TRUNCATE_LIMIT` bytes (on a char boundary) plus a note with the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a secret (API token) for display, keeping only a short prefix.
///
/// Short secrets are masked entirely.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= SECRET_VISIBLE_PREFIX * 2 {
        "*".repeat(count)
    } else {
        let prefix: String = secret.chars().take(SECRET_VISIBLE_PREFIX).collect();
        format!("{prefix}{}", "*".repeat(count - SECRET_VISIBLE_PREFIX))
    }
}
