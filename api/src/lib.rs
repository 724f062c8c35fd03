//! # HTTP API Layer
//!
//! actix-web presentation layer for the MealTrack backend. Request DTOs are
//! validated before any service call; domain errors map onto HTTP statuses
//! in `handlers::error_handler`.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
