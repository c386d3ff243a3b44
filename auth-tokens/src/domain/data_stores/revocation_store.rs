use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RevocationStoreError {
    #[error("revocation store unavailable: {0}")]
    Unavailable(String),
}

/// Transient key-value store with per-key expiry, used as the access token denylist.
#[async_trait::async_trait]
pub trait RevocationStore: Send + Sync {
    /// Overwrites any existing value and resets its TTL.
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), RevocationStoreError>;

    /// `Ok(None)` for keys that were never set or already expired.
    async fn get(&self, key: &str) -> Result<Option<String>, RevocationStoreError>;
}
