//! User account management module

mod service;

pub use service::{NewUser, UserService, UserUpdate};
