use actix_web::{web, HttpResponse};

use mt_core::repositories::{DiaryRepository, ResetTokenRepository, UserRepository};
use mt_core::services::mail::Mailer;
use mt_core::services::token::TokenCache;

use crate::dto::auth_dto::RefreshTokenRequest;
use crate::handlers::error_handler::handle_domain_error;

use super::super::AppState;

/// Handler for POST /auth/logout
///
/// Consumes the presented refresh token. Requires proof of possession; an
/// unknown or already-consumed token yields 401.
pub async fn logout<U, C, R, M, D>(
    state: web::Data<AppState<U, C, R, M, D>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: TokenCache + 'static,
    R: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    D: DiaryRepository + 'static,
{
    match state.auth_service.logout(&request.refresh_token).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
