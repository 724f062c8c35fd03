//! Configuration modules for the MealTrack backend.

pub mod auth;
pub mod cache;
pub mod database;
pub mod mail;
pub mod server;

pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use mail::MailConfig;
pub use server::ServerConfig;
