//! Food catalogue route handlers

use actix_web::{web, HttpResponse};
use validator::Validate;

use mt_core::repositories::{DiaryRepository, ResetTokenRepository, UserRepository};
use mt_core::services::mail::Mailer;
use mt_core::services::token::TokenCache;

use crate::dto::diary_dto::{CreateFoodRequest, FoodResponse};
use crate::handlers::error_handler::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Handler for POST /foods
pub async fn create_food<U, C, R, M, D>(
    state: web::Data<AppState<U, C, R, M, D>>,
    _auth: AuthContext,
    request: web::Json<CreateFoodRequest>,
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
        .diary_service
        .add_food(request.into_inner().into())
        .await
    {
        Ok(food) => HttpResponse::Ok().json(FoodResponse::from(food)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /foods/{barcode}
pub async fn food_by_barcode<U, C, R, M, D>(
    state: web::Data<AppState<U, C, R, M, D>>,
    _auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    C: TokenCache + 'static,
    R: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    D: DiaryRepository + 'static,
{
    match state.diary_service.food_by_barcode(&path.into_inner()).await {
        Ok(food) => HttpResponse::Ok().json(FoodResponse::from(food)),
        Err(error) => handle_domain_error(error),
    }
}
