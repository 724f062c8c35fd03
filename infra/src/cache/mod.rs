//! Redis caching layer.

pub mod redis_client;
pub mod token_cache;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;
pub use token_cache::RedisTokenCache;
