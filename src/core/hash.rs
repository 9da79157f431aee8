//! Content fingerprints used as cache keys
//!
//! A fingerprint is the lowercase hex BLAKE3 digest of the raw file bytes.
//! It depends only on the bytes, so it is stable across runs, machines and
//! toolchain versions.

/// Length in characters of a hex-encoded fingerprint
pub const FINGERPRINT_LEN: usize = 64;

/// Compute the fingerprint of a byte slice
///
/// # Arguments
/// * `data` - The complete file contents
///
/// # Returns
/// The 64-character lowercase hex digest
pub fn fingerprint(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Check whether a string has the shape of a fingerprint
///
/// Used by the cache to reject keys that could escape its directory.
pub fn is_fingerprint(value: &str) -> bool {
    value.len() == FINGERPRINT_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
