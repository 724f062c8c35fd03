//! Diary route handlers
//!
//! All diary routes are bearer-guarded; entries are scoped to the token
//! subject, so one user can never list or delete another user's entries.

use actix_web::{web, HttpResponse};

use mt_core::repositories::{DiaryRepository, ResetTokenRepository, UserRepository};
use mt_core::services::mail::Mailer;
use mt_core::services::token::TokenCache;

use crate::dto::diary_dto::{AddEntryRequest, EntryResponse};
use crate::handlers::error_handler::handle_domain_error;
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Handler for GET /diary/entries
pub async fn list_entries<U, C, R, M, D>(
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
    match state.diary_service.entries(auth.user_id).await {
        Ok(entries) => HttpResponse::Ok().json(
            entries
                .into_iter()
                .map(EntryResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /diary/entries
pub async fn add_entry<U, C, R, M, D>(
    state: web::Data<AppState<U, C, R, M, D>>,
    auth: AuthContext,
    request: web::Json<AddEntryRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: TokenCache + 'static,
    R: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    D: DiaryRepository + 'static,
{
    match state
        .diary_service
        .add_entry(auth.user_id, request.food_id, request.quantity)
        .await
    {
        Ok(entry) => HttpResponse::Ok().json(EntryResponse::from(entry)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /diary/entries/{id}
pub async fn delete_entry<U, C, R, M, D>(
    state: web::Data<AppState<U, C, R, M, D>>,
    auth: AuthContext,
    path: web::Path<i64>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: TokenCache + 'static,
    R: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    D: DiaryRepository + 'static,
{
    match state
        .diary_service
        .delete_entry(auth.user_id, path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
