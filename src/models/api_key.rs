//! API key model.
//!
//! Wraps a key extracted from the `Authorization` header. Only its
//! fingerprint leaves the middleware.

use sha2::{Digest, Sha256};

/// An API key supplied by a client.
pub struct ApiKey(String);

impl ApiKey {
    /// SHA-256 hash of the key as 64 lowercase hex characters.
    ///
    /// Stable for a given key, so it can be used to correlate requests
    /// without storing the key itself.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.0.as_bytes());

        hex::encode(hasher.finalize())
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}
