//! Utility functions for the keyring
//!
//! This module contains common utility functions used throughout the keyring.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // optional whitespace, '#', rest of the line
    static ref COMMENT_PATTERN: Regex = Regex::new(r"\s*#[^\n]*").expect("comment pattern is valid");
}

/// Remove every `#` comment (and the whitespace leading up to it) from `text`.
///
/// A `#` inside a JSON string value is stripped too; none of the encodings
/// stored in a secret file contain one.
pub fn strip_comments(text: &str) -> String {
    COMMENT_PATTERN.replace_all(text, "").into_owned()
}

/// Convert bytes to a `0x`-prefixed lowercase hex string
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Keccak256 hash function
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    use sha3::{Digest, Keccak256};
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Calculate SHA256 hash
pub fn sha256_hash(data: &[u8]) -> [u8; 32] {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}
