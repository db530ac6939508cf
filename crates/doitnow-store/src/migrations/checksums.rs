//! Checksums for migrations
//!
//! A SHA-256 of the migration SQL is recorded when it is applied, so an
//! edited migration is detected on the next start.

use sha2::{Digest, Sha256};

/// Compute SHA256 checksum of a string
pub fn compute_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
