use std::time::Duration;

use crate::domain::{RevocationStore, RevocationStoreError};
use crate::services::data_stores::{RedisService, RedisServiceError};
use crate::utils::REVOKED_TOKEN_KEY_PREFIX;

/// Denylist backed by Redis keys with native expiry.
pub struct RedisRevocationStore {
    redis_service: RedisService,
}

impl RedisRevocationStore {
    pub fn new(redis_service: RedisService) -> Self {
        Self { redis_service }
    }

    fn namespaced(key: &str) -> String {
        format!("{REVOKED_TOKEN_KEY_PREFIX}{key}")
    }
}

impl From<RedisServiceError> for RevocationStoreError {
    fn from(e: RedisServiceError) -> Self {
        RevocationStoreError::Unavailable(e.to_string())
    }
}

#[async_trait::async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), RevocationStoreError> {
        self.redis_service
            .set_with_ttl(&Self::namespaced(key), value, ttl)
            .await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, RevocationStoreError> {
        Ok(self.redis_service.get(&Self::namespaced(key)).await?)
    }
}
