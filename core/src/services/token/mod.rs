//! Token service module for JWT management
//!
//! This module is the token issuance/validation/revocation engine:
//! - access/refresh token pair generation
//! - refresh-token validation against signature and allow-list cache
//! - single-use refresh-token consumption (rotation and logout)

mod cache;
mod config;
mod service;

#[cfg(test)]
mod mock;
#[cfg(test)]
mod tests;

pub use cache::{CachedSubject, TokenCache};
pub use config::TokenServiceConfig;
pub use service::TokenService;

#[cfg(test)]
pub use mock::MockTokenCache;
