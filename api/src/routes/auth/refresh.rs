use actix_web::{web, HttpResponse};

use mt_core::repositories::{DiaryRepository, ResetTokenRepository, UserRepository};
use mt_core::services::mail::Mailer;
use mt_core::services::token::TokenCache;

use crate::dto::auth_dto::RefreshTokenRequest;
use crate::handlers::error_handler::handle_domain_error;

use super::super::AppState;

/// Handler for POST /auth/refresh
///
/// Rotates a refresh token: the presented token is consumed and a brand-new
/// pair is returned. A reused token yields 401.
pub async fn refresh<U, C, R, M, D>(
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
    match state.auth_service.refresh(&request.refresh_token).await {
        Ok(pair) => HttpResponse::Ok().json(pair),
        Err(error) => handle_domain_error(error),
    }
}
