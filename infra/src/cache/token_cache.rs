//! Redis-backed refresh-token allow-list.

use async_trait::async_trait;
use tracing::error;

use mt_core::services::token::{CachedSubject, TokenCache};

use super::redis_client::RedisClient;

/// Key namespace for refresh-token entries
const KEY_PREFIX: &str = "refresh_token:";

/// Redis implementation of the refresh-token allow-list
///
/// Entries are JSON-encoded [`CachedSubject`] values keyed by the token
/// string, expired by Redis itself via millisecond TTLs. Consumption uses
/// GETDEL so a token can only ever be taken once.
#[derive(Clone)]
pub struct RedisTokenCache {
    client: RedisClient,
}

impl RedisTokenCache {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn key(token: &str) -> String {
        format!("{}{}", KEY_PREFIX, token)
    }

    fn decode(raw: String) -> Result<CachedSubject, String> {
        serde_json::from_str(&raw).map_err(|e| {
            error!("Corrupt refresh-token cache entry: {}", e);
            format!("Corrupt cache entry: {}", e)
        })
    }
}

#[async_trait]
impl TokenCache for RedisTokenCache {
    async fn get(&self, key: &str) -> Result<Option<CachedSubject>, String> {
        match self.client.get(&Self::key(key)).await {
            Ok(Some(raw)) => Ok(Some(Self::decode(raw)?)),
            Ok(None) => Ok(None),
            Err(e) => Err(e.to_string()),
        }
    }

    async fn set(&self, key: &str, value: CachedSubject, ttl_ms: u64) -> Result<(), String> {
        let encoded =
            serde_json::to_string(&value).map_err(|e| format!("Failed to encode entry: {}", e))?;

        self.client
            .set_with_expiry_ms(&Self::key(key), &encoded, ttl_ms)
            .await
            .map_err(|e| e.to_string())
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        self.client
            .delete(&Self::key(key))
            .await
            .map_err(|e| e.to_string())
    }

    async fn take(&self, key: &str) -> Result<Option<CachedSubject>, String> {
        match self.client.get_del(&Self::key(key)).await {
            Ok(Some(raw)) => Ok(Some(Self::decode(raw)?)),
            Ok(None) => Ok(None),
            Err(e) => Err(e.to_string()),
        }
    }
}
