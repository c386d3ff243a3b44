use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::{RevocationStore, RevocationStoreError};
use crate::utils::Clock;

struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// In-memory denylist. Entries expire against the injected clock, so tests can move time
/// forward without sleeping. Expired entries are evicted on every write.
pub struct HashmapRevocationStore {
    entries: RwLock<HashMap<String, Entry>>,
    clock: Arc<dyn Clock>,
}

impl HashmapRevocationStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl RevocationStore for HashmapRevocationStore {
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> Result<(), RevocationStoreError> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| RevocationStoreError::Unavailable(e.to_string()))?;
        let now = self.clock.now();
        let entry = Entry {
            value: value.to_owned(),
            expires_at: now + ttl,
        };
        let mut entries = self.entries.write().await;
        entries.retain(|_, e| e.expires_at > now);
        entries.insert(key.to_owned(), entry);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, RevocationStoreError> {
        let now = self.clock.now();
        Ok(self
            .entries
            .read()
            .await
            .get(key)
            .filter(|e| e.expires_at > now)
            .map(|e| e.value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::ManualClock;

    #[tokio::test]
    async fn test_put_and_get() {
        let store = HashmapRevocationStore::new(Arc::new(ManualClock::at_epoch(1_000)));
        store.put("k", "tok", Duration::from_secs(60)).await.unwrap();
        assert_eq!(Some("tok".to_owned()), store.get("k").await.unwrap());
        assert_eq!(None, store.get("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_entry_expires_with_clock() {
        let clock = Arc::new(ManualClock::at_epoch(1_000));
        let store = HashmapRevocationStore::new(clock.clone());
        store.put("k", "tok", Duration::from_secs(60)).await.unwrap();

        clock.advance(chrono::Duration::seconds(59));
        assert!(store.get("k").await.unwrap().is_some());

        clock.advance(chrono::Duration::seconds(1));
        assert!(store.get("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_evicts_expired_entries() {
        let clock = Arc::new(ManualClock::at_epoch(1_000));
        let store = HashmapRevocationStore::new(clock.clone());
        store.put("a", "1", Duration::from_secs(10)).await.unwrap();
        store.put("b", "2", Duration::from_secs(100)).await.unwrap();
        assert_eq!(store.len().await, 2);

        clock.advance(chrono::Duration::seconds(10));
        store.put("c", "3", Duration::from_secs(10)).await.unwrap();

        assert_eq!(store.len().await, 2);
        assert_eq!(None, store.get("a").await.unwrap());
        assert_eq!(Some("2".to_owned()), store.get("b").await.unwrap());

        clock.advance(chrono::Duration::seconds(200));
        store.put("d", "4", Duration::from_secs(10)).await.unwrap();
        assert_eq!(store.len().await, 1);
        assert!(!store.is_empty().await);
    }

    #[tokio::test]
    async fn test_put_overwrites_and_resets_ttl() {
        let clock = Arc::new(ManualClock::at_epoch(1_000));
        let store = HashmapRevocationStore::new(clock.clone());
        store.put("k", "a", Duration::from_secs(10)).await.unwrap();
        clock.advance(chrono::Duration::seconds(5));
        store.put("k", "b", Duration::from_secs(10)).await.unwrap();
        clock.advance(chrono::Duration::seconds(8));

        assert_eq!(Some("b".to_owned()), store.get("k").await.unwrap());
    }
}
