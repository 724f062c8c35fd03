use actix_web::{web, HttpResponse};
use validator::Validate;

use mt_core::repositories::{DiaryRepository, ResetTokenRepository, UserRepository};
use mt_core::services::mail::Mailer;
use mt_core::services::token::TokenCache;

use crate::dto::auth_dto::LoginRequest;
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};

use super::super::AppState;

/// Handler for POST /auth/login
///
/// Verifies a username/password pair and returns a fresh token pair.
/// Unknown usernames and wrong passwords fail identically with 401.
pub async fn login<U, C, R, M, D>(
    state: web::Data<AppState<U, C, R, M, D>>,
    request: web::Json<LoginRequest>,
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

    let user = match state
        .auth_service
        .validate_user(&request.username, &request.password)
        .await
    {
        Ok(user) => user,
        Err(error) => return handle_domain_error(error),
    };

    match state.auth_service.login(&user).await {
        Ok(pair) => HttpResponse::Ok().json(pair),
        Err(error) => handle_domain_error(error),
    }
}
