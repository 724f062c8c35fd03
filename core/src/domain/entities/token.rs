//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token expiration time (5 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 5;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Claims structure for JWT payload
///
/// Both access and refresh tokens carry the same payload; they are told
/// apart only by the secret that signed them and their lifetimes. The `jti`
/// makes every minted token a distinct string even for the same subject in
/// the same second, so consuming one refresh token can never resurrect
/// another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: i64,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token
    pub fn new_access_token(user_id: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(ACCESS_TOKEN_EXPIRY_MINUTES);

        Self {
            sub: user_id,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Creates new claims for a refresh token
    pub fn new_refresh_token(user_id: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::days(REFRESH_TOKEN_EXPIRY_DAYS);

        Self {
            sub: user_id,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Token pair returned to the client
///
/// Serialized in camelCase to match the public API contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Short-lived JWT access token
    pub access_token: String,

    /// Long-lived, cache-backed JWT refresh token
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let claims = Claims::new_access_token(42);

        assert_eq!(claims.sub, 42);
        assert!(!claims.is_expired());
        // ~5 minutes of validity
        let remaining = claims.exp - Utc::now().timestamp();
        assert!(remaining > 4 * 60 && remaining <= 5 * 60);
    }

    #[test]
    fn test_refresh_token_claims() {
        let claims = Claims::new_refresh_token(42);

        assert_eq!(claims.sub, 42);
        assert!(!claims.is_expired());
        // ~7 days of validity
        let remaining = claims.exp - Utc::now().timestamp();
        assert!(remaining > 6 * 24 * 3600 && remaining <= 7 * 24 * 3600);
    }

    #[test]
    fn test_each_token_gets_a_distinct_jti() {
        let a = Claims::new_refresh_token(42);
        let b = Claims::new_refresh_token(42);

        assert_ne!(a.jti, b.jti);
        assert!(!a.jti.is_empty());
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims = Claims::new_access_token(1);
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
    }

    #[test]
    fn test_token_pair_serializes_camel_case() {
        let pair = TokenPair::new("a".to_string(), "r".to_string());
        let json = serde_json::to_string(&pair).unwrap();

        assert!(json.contains("accessToken"));
        assert!(json.contains("refreshToken"));
    }
}
