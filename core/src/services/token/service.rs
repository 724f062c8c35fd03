//! Main token service implementation

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::token::{Claims, TokenPair, REFRESH_TOKEN_EXPIRY_DAYS};
use crate::errors::{DomainError, DomainResult};

use super::cache::{CachedSubject, TokenCache};
use super::config::TokenServiceConfig;

/// Cache TTL for refresh tokens, mirroring the signed expiry (7 days in ms)
const REFRESH_TOKEN_TTL_MS: u64 = (REFRESH_TOKEN_EXPIRY_DAYS as u64) * 24 * 60 * 60 * 1000;

/// Service for issuing, validating, and revoking JWT token pairs
///
/// A refresh token is valid only if all three hold: its signature verifies
/// against the refresh secret, its key is present in the allow-list cache,
/// and the signed subject equals the cached subject. The double-check
/// defends against cache/signing-key desynchronization and replay of tokens
/// issued under a rotated secret.
pub struct TokenService<C: TokenCache> {
    cache: Arc<C>,
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    validation: Validation,
}

impl<C: TokenCache> TokenService<C> {
    /// Creates a new token service instance
    pub fn new(cache: Arc<C>, config: TokenServiceConfig) -> Self {
        Self {
            cache,
            access_encoding_key: EncodingKey::from_secret(config.access_secret.as_bytes()),
            access_decoding_key: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_encoding_key: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            refresh_decoding_key: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            validation: Validation::default(),
        }
    }

    /// Issues a fresh access/refresh token pair for a subject
    ///
    /// Both tokens carry the subject and a unique `jti`; the refresh token
    /// is additionally registered in the allow-list cache under its own
    /// string value, with a TTL mirroring its signed expiry.
    pub async fn issue(&self, user_id: i64) -> DomainResult<TokenPair> {
        let access_token = self.encode_jwt(&Claims::new_access_token(user_id), Secret::Access)?;
        let refresh_token = self.encode_jwt(&Claims::new_refresh_token(user_id), Secret::Refresh)?;

        self.cache
            .set(&refresh_token, CachedSubject { user_id }, REFRESH_TOKEN_TTL_MS)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to register refresh token: {}", e),
            })?;

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Validates a refresh token and returns the subject id
    ///
    /// Short-circuits on the first failure, in order: cache membership,
    /// signature/expiry, subject match. Signature and expiry failures are
    /// not distinguished to the caller. An expired token that is still
    /// cached gets its stale entry deleted before failing (self-healing).
    pub async fn validate_refresh_token(&self, token: &str) -> DomainResult<i64> {
        let cached = self
            .cache
            .get(token)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Refresh token lookup failed: {}", e),
            })?
            .ok_or_else(DomainError::invalid_refresh_token)?;

        let claims = match self.decode_refresh(token) {
            Ok(claims) => claims,
            Err(e) => {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                    warn!("expired refresh token was still cached, deleting");
                    let _ = self.cache.delete(token).await;
                }
                return Err(DomainError::invalid_refresh_token());
            }
        };

        if claims.sub != cached.user_id {
            return Err(DomainError::invalid_refresh_token());
        }

        Ok(cached.user_id)
    }

    /// Consumes a refresh token and issues a brand-new pair
    ///
    /// Refresh tokens are single-use: the old cache entry is taken
    /// atomically, so concurrent refreshes of the same token cannot both
    /// succeed, and every successful refresh rotates both tokens.
    pub async fn refresh(&self, token: &str) -> DomainResult<TokenPair> {
        let user_id = self.consume_refresh_token(token).await?;
        self.issue(user_id).await
    }

    /// Consumes a refresh token without issuing new tokens
    ///
    /// Requires proof of possession: an invalid token still fails with
    /// Unauthorized.
    pub async fn logout(&self, token: &str) -> DomainResult<()> {
        let user_id = self.consume_refresh_token(token).await?;
        debug!(user_id, "user logged out");
        Ok(())
    }

    /// Verifies an access token and returns its claims
    ///
    /// Stateless: validity is determined purely by signature and expiry.
    pub fn verify_access_token(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.access_decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::Unauthorized {
                message: "Invalid access token".to_string(),
            })
    }

    /// Atomically takes the cache entry and checks the signed claim against it
    ///
    /// The entry is consumed before verification; a token that fails the
    /// signature or subject check stays consumed.
    async fn consume_refresh_token(&self, token: &str) -> DomainResult<i64> {
        let cached = self
            .cache
            .take(token)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Refresh token consumption failed: {}", e),
            })?
            .ok_or_else(DomainError::invalid_refresh_token)?;

        let claims = self
            .decode_refresh(token)
            .map_err(|_| DomainError::invalid_refresh_token())?;

        if claims.sub != cached.user_id {
            return Err(DomainError::invalid_refresh_token());
        }

        Ok(cached.user_id)
    }

    fn decode_refresh(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.refresh_decoding_key, &self.validation)
            .map(|data| data.claims)
    }

    fn encode_jwt(&self, claims: &Claims, secret: Secret) -> DomainResult<String> {
        let key = match secret {
            Secret::Access => &self.access_encoding_key,
            Secret::Refresh => &self.refresh_encoding_key,
        };
        encode(&Header::default(), claims, key).map_err(|e| DomainError::Internal {
            message: format!("Token generation failed: {}", e),
        })
    }
}

enum Secret {
    Access,
    Refresh,
}
