//! User account route handlers
//!
//! Registration is open; profile mutation and deletion require a bearer
//! token whose subject matches the path id.

use actix_web::{web, HttpResponse};
use validator::Validate;

use mt_core::errors::DomainError;
use mt_core::repositories::{DiaryRepository, ResetTokenRepository, UserRepository};
use mt_core::services::mail::Mailer;
use mt_core::services::token::TokenCache;

use crate::dto::user_dto::{RegisterUserRequest, UpdateUserRequest, UserResponse};
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;

use super::AppState;

fn id_mismatch() -> HttpResponse {
    handle_domain_error(DomainError::Unauthorized {
        message: "User id mismatch".to_string(),
    })
}

/// Handler for POST /users
pub async fn register<U, C, R, M, D>(
    state: web::Data<AppState<U, C, R, M, D>>,
    request: web::Json<RegisterUserRequest>,
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
        .user_service
        .register(request.into_inner().into())
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PATCH /users/{id}
pub async fn update<U, C, R, M, D>(
    state: web::Data<AppState<U, C, R, M, D>>,
    auth: AuthContext,
    path: web::Path<i64>,
    request: web::Json<UpdateUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: TokenCache + 'static,
    R: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    D: DiaryRepository + 'static,
{
    let id = path.into_inner();
    if auth.user_id != id {
        return id_mismatch();
    }

    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    match state
        .user_service
        .update_profile(id, request.into_inner().into())
        .await
    {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /users/{id}
pub async fn delete<U, C, R, M, D>(
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
    let id = path.into_inner();
    if auth.user_id != id {
        return id_mismatch();
    }

    match state.user_service.delete(id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
