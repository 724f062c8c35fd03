//! Token signing configuration

use serde::{Deserialize, Serialize};

/// JWT signing configuration
///
/// Access and refresh tokens are signed with two independent secrets so that
/// a leaked access secret never validates refresh tokens. Token lifetimes
/// are fixed constants of the token entities, not configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret for signing access tokens
    pub secret: String,

    /// Dedicated secret for signing refresh tokens
    pub refresh_secret: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            refresh_secret: String::from("development-refresh-secret-please-change"),
        }
    }
}

impl JwtConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "development-secret-please-change-in-production".to_string());
        let refresh_secret = std::env::var("JWT_REFRESH_SECRET")
            .unwrap_or_else(|_| "development-refresh-secret-please-change".to_string());

        Self {
            secret,
            refresh_secret,
        }
    }

    /// Check if either secret is still a development default
    pub fn is_using_default_secret(&self) -> bool {
        self.secret.starts_with("development-") || self.refresh_secret.starts_with("development-")
    }
}
