//! # MealTrack Core
//!
//! Core business logic and domain layer for the MealTrack backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types. All I/O (Redis, MySQL, mail delivery)
//! happens behind traits implemented in the infrastructure crate.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
