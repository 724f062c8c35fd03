//! Authentication route handlers
//!
//! Local (username/password) login, refresh-token rotation, logout, the
//! password-reset pair, and the bearer-guarded profile endpoint.

pub mod forgot_password;
pub mod login;
pub mod logout;
pub mod me;
pub mod refresh;
pub mod reset_password;
