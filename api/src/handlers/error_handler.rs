//! Domain error to HTTP response mapping.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use validator::ValidationErrors;

use mt_core::errors::DomainError;

use crate::dto::ErrorResponse;

/// Map a domain error onto an HTTP response
///
/// Internal errors are logged in full but surfaced as an opaque 500; all
/// other variants carry their domain message through.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Unauthorized { message } => {
            ErrorResponse::new("unauthorized".to_string(), message)
                .to_response(StatusCode::UNAUTHORIZED)
        }
        DomainError::Conflict { message } => {
            ErrorResponse::new("conflict".to_string(), message).to_response(StatusCode::CONFLICT)
        }
        DomainError::NotFound { resource } => {
            ErrorResponse::new("not_found".to_string(), format!("{} not found", resource))
                .to_response(StatusCode::NOT_FOUND)
        }
        DomainError::Validation { message } => {
            ErrorResponse::new("validation_error".to_string(), message)
                .to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            ErrorResponse::new(
                "internal_error".to_string(),
                "An internal error occurred".to_string(),
            )
            .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Map request DTO validation failures onto a 400 response
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    ErrorResponse::new("validation_error".to_string(), errors.to_string())
        .to_response(StatusCode::BAD_REQUEST)
}
