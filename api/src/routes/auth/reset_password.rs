use actix_web::{web, HttpResponse};
use validator::Validate;

use mt_core::repositories::{DiaryRepository, ResetTokenRepository, UserRepository};
use mt_core::services::mail::Mailer;
use mt_core::services::token::TokenCache;

use crate::dto::auth_dto::ResetPasswordRequest;
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};

use super::super::AppState;

/// Handler for POST /auth/reset-password
///
/// Completes a password reset with a mailed token. The token is single-use:
/// it is consumed even when expired.
pub async fn reset_password<U, C, R, M, D>(
    state: web::Data<AppState<U, C, R, M, D>>,
    request: web::Json<ResetPasswordRequest>,
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

    match state
        .auth_service
        .reset_password(&request.token, &request.password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Password updated"
        })),
        Err(error) => handle_domain_error(error),
    }
}
