//! # MealTrack Shared
//!
//! Configuration types shared across the MealTrack backend workspace.
//! All configuration is loaded from environment variables; defaults are
//! suitable for local development only.

pub mod config;

pub use config::*;
