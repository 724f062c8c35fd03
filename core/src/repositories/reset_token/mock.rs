//! Mock implementation of ResetTokenRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::reset_token::PasswordResetToken;
use crate::errors::DomainError;

use super::r#trait::ResetTokenRepository;

/// Mock reset-token repository for testing
pub struct MockResetTokenRepository {
    tokens: Arc<RwLock<Vec<PasswordResetToken>>>,
    next_id: AtomicI64,
}

impl MockResetTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored rows, for assertions
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    /// Whether the store is empty, for assertions
    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl Default for MockResetTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResetTokenRepository for MockResetTokenRepository {
    async fn save(&self, mut token: PasswordResetToken) -> Result<PasswordResetToken, DomainError> {
        token.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.tokens.write().await.push(token.clone());
        Ok(token)
    }

    async fn find_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<PasswordResetToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.iter().find(|t| t.token_hash == token_hash).cloned())
    }

    async fn delete_for_user(&self, user_id: i64) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|t| t.user_id != user_id);
        Ok(before - tokens.len())
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let now = Utc::now();
        let before = tokens.len();
        tokens.retain(|t| t.expiry >= now);
        Ok(before - tokens.len())
    }
}
