//! MySQL repository implementations.

pub mod diary_repository_impl;
pub mod reset_token_repository_impl;
pub mod user_repository_impl;

pub use diary_repository_impl::MySqlDiaryRepository;
pub use reset_token_repository_impl::MySqlResetTokenRepository;
pub use user_repository_impl::MySqlUserRepository;

use mt_core::errors::DomainError;

/// Map a SQLx error to an opaque domain-internal error
pub(crate) fn db_err(e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("Database query failed: {}", e),
    }
}
