use actix_web::{web, HttpResponse};
use validator::Validate;

use mt_core::repositories::{DiaryRepository, ResetTokenRepository, UserRepository};
use mt_core::services::mail::Mailer;
use mt_core::services::token::TokenCache;

use crate::dto::auth_dto::ForgotPasswordRequest;
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};

use super::super::AppState;

/// Handler for POST /auth/forgot-password
///
/// Responds 200 whether or not the address has an account, so the endpoint
/// cannot be used to probe for registered emails.
pub async fn forgot_password<U, C, R, M, D>(
    state: web::Data<AppState<U, C, R, M, D>>,
    request: web::Json<ForgotPasswordRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: TokenCache + 'static,
    R: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    D: DiaryRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state.auth_service.forgot_password(&request.email).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "If the address has an account, a reset link has been sent"
        })),
        Err(error) => handle_domain_error(error),
    }
}
