//! Out-of-band notification contract.

use async_trait::async_trait;

/// Trait for password-reset mail delivery
///
/// The implementation receives the plaintext reset token exactly once, at
/// creation time; only the token's digest is ever persisted.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send a password-reset message containing the plaintext token
    async fn send_password_reset(&self, email: &str, token: &str) -> Result<(), String>;
}
