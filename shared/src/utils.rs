//! # Shared Utility Functions
//!
//! Display helpers for ledger data.
//!
//! ## Hash Formatting
//!
//! - [`format_hash`] - Shorten a hash with ellipsis (first N and last M characters)
//! - [`truncate_hash`] - `format_hash` with the default 8/8 split
//!
//! ```rust
//! use shared::utils::format_hash;
//!
//! let hash = "0000a3f1c9e2b7d4e5f60718293a4b5c6d7e8f9011223344556677889900aabb";
//! assert_eq!(format_hash(hash, 6, 4), "0000a3...aabb");
//! ```

/// Format a hash by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the hash is too short to shorten, or is not ASCII, it is returned as-is.
///
/// ```rust
/// use shared::utils::format_hash;
///
/// assert_eq!(format_hash("abcdef0123456789", 4, 4), "abcd...6789");
/// assert_eq!(format_hash("short", 4, 4), "short");
/// assert_eq!(format_hash("", 4, 4), "");
/// ```
pub fn format_hash(hash: &str, prefix_len: usize, suffix_len: usize) -> String {
    let hash_len = hash.len();

    // Hex hashes are ASCII; anything else is shown untouched rather than split mid-char
    if !hash.is_ascii() || hash_len <= prefix_len + suffix_len {
        return hash.to_string();
    }

    let prefix = &hash[..prefix_len];
    let suffix = &hash[hash_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a hash with the default 8-character prefix and suffix.
pub fn truncate_hash(hash: &str) -> String {
    format_hash(hash, 8, 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "0000a3f1c9e2b7d4e5f60718293a4b5c6d7e8f9011223344556677889900aabb";

    #[test]
    fn test_format_hash() {
        assert_eq!(format_hash(HASH, 4, 4), "0000...aabb");
        assert_eq!(format_hash(HASH, 6, 2), "0000a3...bb");
    }

    #[test]
    fn test_format_hash_short_or_empty() {
        assert_eq!(format_hash("abc", 4, 4), "abc");
        assert_eq!(format_hash("12345678", 4, 4), "12345678");
        assert_eq!(format_hash("", 8, 8), "");
    }

    #[test]
    fn test_format_hash_non_ascii_untouched() {
        assert_eq!(format_hash("ééééééééééé", 2, 2), "ééééééééééé");
    }

    #[test]
    fn test_truncate_hash() {
        assert_eq!(truncate_hash(HASH), "0000a3f1...9900aabb");
    }
}
