//! Authentication orchestration service.

use std::sync::Arc;

use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::domain::entities::reset_token::PasswordResetToken;
use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ResetTokenRepository, UserRepository};
use crate::services::mail::Mailer;
use crate::services::token::{TokenCache, TokenService};

use super::password::PasswordHasher;

/// Random bytes per reset token (hex-encoded to 128 chars)
const RESET_TOKEN_BYTES: usize = 64;

/// Authentication service
///
/// Verifies credentials, drives the token engine for login/refresh/logout,
/// and owns the password-reset lifecycle. Reset tokens are stored hashed;
/// the plaintext only ever travels through the mailer.
pub struct AuthService<U, C, R, M>
where
    U: UserRepository,
    C: TokenCache,
    R: ResetTokenRepository,
    M: Mailer,
{
    users: Arc<U>,
    tokens: Arc<TokenService<C>>,
    reset_tokens: Arc<R>,
    mailer: Arc<M>,
    hasher: PasswordHasher,
}

impl<U, C, R, M> AuthService<U, C, R, M>
where
    U: UserRepository,
    C: TokenCache,
    R: ResetTokenRepository,
    M: Mailer,
{
    pub fn new(
        users: Arc<U>,
        tokens: Arc<TokenService<C>>,
        reset_tokens: Arc<R>,
        mailer: Arc<M>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            users,
            tokens,
            reset_tokens,
            mailer,
            hasher,
        }
    }

    /// Checks a username/password pair against the stored digest
    ///
    /// Returns the user on success. Unknown usernames and wrong passwords
    /// produce the same generic error so the two cases are not
    /// distinguishable from outside.
    pub async fn validate_user(&self, username: &str, password: &str) -> DomainResult<User> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(DomainError::invalid_credentials)?;

        if !self.hasher.verify(&user.password_hash, password)? {
            debug!(username = %username, "Password mismatch during login");
            return Err(DomainError::invalid_credentials());
        }

        if !user.is_active {
            debug!(user_id = user.id, "Login attempt on deactivated account");
            return Err(DomainError::invalid_credentials());
        }

        Ok(user)
    }

    /// Issues a token pair for an already-verified user
    pub async fn login(&self, user: &User) -> DomainResult<TokenPair> {
        let pair = self.tokens.issue(user.id).await?;
        info!(user_id = user.id, "User logged in");
        Ok(pair)
    }

    /// Rotates a refresh token into a fresh token pair
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        self.tokens.refresh(refresh_token).await
    }

    /// Revokes a refresh token
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        self.tokens.logout(refresh_token).await
    }

    /// Starts a password reset for the given email address
    ///
    /// Always returns `Ok` for unknown addresses so the endpoint does not
    /// leak which emails have accounts. For known addresses a fresh random
    /// token is generated, its SHA-256 digest persisted, and the plaintext
    /// handed to the mailer.
    pub async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                debug!("Password reset requested for unknown email");
                return Ok(());
            }
        };

        let token = generate_reset_token();
        let record = PasswordResetToken::new(user.id, hash_token(&token));
        self.reset_tokens.save(record).await?;

        self.mailer
            .send_password_reset(email, &token)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to send password reset mail: {}", e),
            })?;

        info!(user_id = user.id, "Password reset token issued");
        Ok(())
    }

    /// Completes a password reset with a previously mailed token
    ///
    /// The token is consumed whether or not it is still within its expiry
    /// window. All outstanding tokens for the user are removed, so a reset
    /// attempt with an expired token also invalidates any newer ones.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> DomainResult<()> {
        let record = self
            .reset_tokens
            .find_by_hash(&hash_token(token))
            .await?
            .ok_or_else(|| DomainError::Unauthorized {
                message: "Invalid token".to_string(),
            })?;

        // Consume before the expiry check; a used token never works twice
        self.reset_tokens.delete_for_user(record.user_id).await?;

        if record.is_expired() {
            warn!(user_id = record.user_id, "Expired password reset token");
            return Err(DomainError::Unauthorized {
                message: "Token expired".to_string(),
            });
        }

        let digest = self.hasher.hash(new_password)?;
        self.users.update_password(record.user_id, &digest).await?;

        info!(user_id = record.user_id, "Password reset completed");
        Ok(())
    }
}

/// Generates a fresh random reset token as a hex string
fn generate_reset_token() -> String {
    let mut bytes = [0u8; RESET_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// SHA-256 digest of a token, hex-encoded, as stored at rest
fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
