//! Configuration for the token service

/// Configuration for the token service
///
/// Access and refresh tokens are signed with independent secrets. Token
/// lifetimes are fixed by the entity constants; only the secrets vary by
/// deployment.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret for signing access tokens
    pub access_secret: String,
    /// Dedicated secret for signing refresh tokens
    pub refresh_secret: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_secret: "development-secret-please-change-in-production".to_string(),
            refresh_secret: "development-refresh-secret-please-change".to_string(),
        }
    }
}
