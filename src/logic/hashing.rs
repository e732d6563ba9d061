//! Content hashing for cache keys

use sha2::{Digest, Sha256};

/// SHA-256 hash of raw input bytes, lowercase hex.
///
/// Deterministic and total: the empty sequence hashes like any other input.
/// Used purely as a cache key, not for any security property.
pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
