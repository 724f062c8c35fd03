//! Password-reset token entity.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Password-reset token expiration time (24 hours)
pub const RESET_TOKEN_EXPIRY_HOURS: i64 = 24;

/// Persisted single-use password-reset token
///
/// Only the SHA-256 hex digest of the plaintext token is ever stored; the
/// plaintext exists in memory just long enough to be mailed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetToken {
    /// Auto-increment identifier
    pub id: i64,

    /// SHA-256 hex digest of the plaintext token
    pub token_hash: String,

    /// Owning user
    pub user_id: i64,

    /// Timestamp after which the token is permanently unusable
    pub expiry: DateTime<Utc>,
}

impl PasswordResetToken {
    /// Creates a new reset token expiring 24 hours from now
    pub fn new(user_id: i64, token_hash: String) -> Self {
        Self {
            id: 0,
            token_hash,
            user_id,
            expiry: Utc::now() + Duration::hours(RESET_TOKEN_EXPIRY_HOURS),
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        self.expiry < Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_expires_in_a_day() {
        let token = PasswordResetToken::new(7, "digest".to_string());

        assert!(!token.is_expired());
        let remaining = token.expiry - Utc::now();
        assert!(remaining <= Duration::hours(24));
        assert!(remaining > Duration::hours(23));
    }

    #[test]
    fn test_expired_token() {
        let mut token = PasswordResetToken::new(7, "digest".to_string());
        token.expiry = Utc::now() - Duration::seconds(1);

        assert!(token.is_expired());
    }
}
