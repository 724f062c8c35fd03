//! Test doubles for authentication collaborators

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::services::mail::Mailer;

/// Mock mailer that records every message instead of sending it
pub struct MockMailer {
    sent: Arc<RwLock<Vec<(String, String)>>>,
    fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            fail: false,
        }
    }

    /// A mailer whose sends always fail
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            fail: true,
        }
    }

    /// Number of recorded messages
    pub async fn sent_count(&self) -> usize {
        self.sent.read().await.len()
    }

    /// The most recently mailed (email, token) pair
    pub async fn last_message(&self) -> Option<(String, String)> {
        self.sent.read().await.last().cloned()
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send_password_reset(&self, email: &str, token: &str) -> Result<(), String> {
        if self.fail {
            return Err("mail gateway unavailable".to_string());
        }
        self.sent
            .write()
            .await
            .push((email.to_string(), token.to_string()));
        Ok(())
    }
}
