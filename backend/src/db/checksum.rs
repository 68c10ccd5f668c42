//! Checksum of the raw catalogue dataset.

use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of the catalogue JSON content.
///
/// Reported in the catalogue info so clients can tell when the dataset
/// behind a session changed.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
