use actix_web::{web, HttpResponse};

use mt_core::repositories::{DiaryRepository, ResetTokenRepository, UserRepository};
use mt_core::services::mail::Mailer;
use mt_core::services::token::TokenCache;

use crate::dto::user_dto::UserResponse;
use crate::handlers::error_handler::handle_domain_error;
use crate::middleware::auth::AuthContext;

use super::super::AppState;

/// Handler for GET /auth/me
///
/// Returns the profile of the bearer-token subject.
pub async fn me<U, C, R, M, D>(
    state: web::Data<AppState<U, C, R, M, D>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: TokenCache + 'static,
    R: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    D: DiaryRepository + 'static,
{
    match state.user_service.find_one(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
