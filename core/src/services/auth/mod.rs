//! Authentication service module
//!
//! Credential verification, login/logout/refresh orchestration, and the
//! password-reset token lifecycle.

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::PasswordHasher;
pub use service::AuthService;
