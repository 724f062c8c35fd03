//! MySQL persistence implementations using SQLx.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
