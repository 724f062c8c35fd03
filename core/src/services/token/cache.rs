//! Allow-list cache contract for live refresh tokens.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Cache entry stored under a refresh-token key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedSubject {
    /// Subject id the refresh token was issued for
    pub user_id: i64,
}

/// Trait for the refresh-token allow-list cache
///
/// Presence of a key is part of token validity, not a performance
/// optimization. Single-key operations must be atomic from the caller's
/// perspective. Errors are opaque strings; the token service maps them to
/// internal errors.
#[async_trait]
pub trait TokenCache: Send + Sync {
    /// Look up the entry stored under `key`
    async fn get(&self, key: &str) -> Result<Option<CachedSubject>, String>;

    /// Store `value` under `key` with a TTL in milliseconds
    async fn set(&self, key: &str, value: CachedSubject, ttl_ms: u64) -> Result<(), String>;

    /// Delete the entry under `key`, returning whether it existed
    async fn delete(&self, key: &str) -> Result<bool, String>;

    /// Atomically remove and return the entry under `key`
    ///
    /// Used for single-use consumption: two concurrent consumers of the
    /// same key can never both observe the entry.
    async fn take(&self, key: &str) -> Result<Option<CachedSubject>, String>;
}
