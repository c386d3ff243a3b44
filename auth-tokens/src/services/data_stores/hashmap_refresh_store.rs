use std::collections::HashMap;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{RefreshGrant, RefreshStore, RefreshStoreError, RefreshTokenRecord};

/// In-memory refresh token table, one record per user.
#[derive(Default)]
pub struct HashmapRefreshStore {
    by_user: Mutex<HashMap<Uuid, RefreshTokenRecord>>,
}

impl HashmapRefreshStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn record_for(&self, user_id: Uuid) -> Option<RefreshTokenRecord> {
        self.by_user.lock().await.get(&user_id).cloned()
    }
}

#[async_trait::async_trait]
impl RefreshStore for HashmapRefreshStore {
    async fn upsert(&self, grant: RefreshGrant) -> Result<RefreshTokenRecord, RefreshStoreError> {
        // Lookup and write happen under one lock, so concurrent upserts serialize.
        let mut by_user = self.by_user.lock().await;
        let record = match by_user.get_mut(&grant.user_id) {
            Some(existing) => {
                existing.replace_with(grant);
                existing.clone()
            }
            None => {
                let record = RefreshTokenRecord::from_grant(grant);
                by_user.insert(record.user_id, record.clone());
                record
            }
        };
        Ok(record)
    }

    async fn find(
        &self,
        user_id: Uuid,
        token: &str,
    ) -> Result<Option<RefreshTokenRecord>, RefreshStoreError> {
        Ok(self
            .by_user
            .lock()
            .await
            .get(&user_id)
            .filter(|r| r.token == token)
            .cloned())
    }
}
