//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
///
/// The `Unauthorized` message is the one surfaced to callers; it is kept
/// deliberately generic so the HTTP layer never leaks whether a username
/// existed, a signature failed, or a token expired.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Unauthorized with the uniform refresh-token message
    pub fn invalid_refresh_token() -> Self {
        DomainError::Unauthorized {
            message: "Invalid refresh token".to_string(),
        }
    }

    /// Unauthorized with the uniform credentials message
    pub fn invalid_credentials() -> Self {
        DomainError::Unauthorized {
            message: "Invalid credentials".to_string(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
