//! # Infrastructure Layer
//!
//! Concrete implementations behind the core's ports:
//! - **Database**: MySQL repositories using SQLx
//! - **Cache**: Redis client and refresh-token allow-list
//! - **Mail**: HTTP mail API client for password-reset delivery

pub mod cache;
pub mod database;
pub mod mail;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
