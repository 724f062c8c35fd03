//! Business services containing domain logic and use cases.

pub mod auth;
pub mod diary;
pub mod mail;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use auth::{AuthService, PasswordHasher};
pub use diary::DiaryService;
pub use mail::Mailer;
pub use token::{CachedSubject, TokenCache, TokenService, TokenServiceConfig};
pub use user::{NewUser, UserService, UserUpdate};
