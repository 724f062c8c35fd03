//! Mock implementation of TokenCache for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use super::cache::{CachedSubject, TokenCache};

/// In-memory token cache for testing
///
/// TTLs are honored logically: expired entries are treated as absent on
/// read and take.
pub struct MockTokenCache {
    entries: Arc<RwLock<HashMap<String, (CachedSubject, Instant)>>>,
}

impl MockTokenCache {
    /// Create a new mock cache
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of live entries, for assertions
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|(_, deadline)| *deadline > now)
            .count()
    }
}

impl Default for MockTokenCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenCache for MockTokenCache {
    async fn get(&self, key: &str) -> Result<Option<CachedSubject>, String> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|(_, deadline)| *deadline > Instant::now())
            .map(|(value, _)| *value))
    }

    async fn set(&self, key: &str, value: CachedSubject, ttl_ms: u64) -> Result<(), String> {
        let deadline = Instant::now() + Duration::from_millis(ttl_ms);
        self.entries
            .write()
            .await
            .insert(key.to_string(), (value, deadline));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        Ok(self.entries.write().await.remove(key).is_some())
    }

    async fn take(&self, key: &str) -> Result<Option<CachedSubject>, String> {
        let mut entries = self.entries.write().await;
        Ok(entries
            .remove(key)
            .filter(|(_, deadline)| *deadline > Instant::now())
            .map(|(value, _)| value))
    }
}
