//! Reset-token repository trait for password-reset token persistence.

use async_trait::async_trait;

use crate::domain::entities::reset_token::PasswordResetToken;
use crate::errors::DomainError;

/// Repository trait for password-reset token persistence
///
/// Rows store only token digests, looked up by `token_hash`. Consumption
/// deletes every row belonging to the user, so at most one reset attempt can
/// ever succeed per issued batch.
#[async_trait]
pub trait ResetTokenRepository: Send + Sync {
    /// Persist a new reset token and return it with its database-assigned id
    async fn save(&self, token: PasswordResetToken) -> Result<PasswordResetToken, DomainError>;

    /// Find a reset token by the SHA-256 hex digest of its plaintext value
    async fn find_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<PasswordResetToken>, DomainError>;

    /// Delete all reset tokens belonging to a user
    ///
    /// Returns the number of rows removed.
    async fn delete_for_user(&self, user_id: i64) -> Result<usize, DomainError>;

    /// Delete expired reset tokens
    ///
    /// Expired rows are already unusable; this exists for manual cleanup
    /// and is not run automatically.
    async fn delete_expired(&self) -> Result<usize, DomainError>;
}
