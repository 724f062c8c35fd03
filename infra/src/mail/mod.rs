//! Mail delivery via a transactional HTTP mail API.

mod client;

pub use client::HttpMailClient;
