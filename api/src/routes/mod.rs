//! Route registration and shared application state.

pub mod auth;
pub mod diary;
pub mod foods;
pub mod users;

use actix_web::{web, HttpResponse};

use mt_core::repositories::{DiaryRepository, ResetTokenRepository, UserRepository};
use mt_core::services::auth::AuthService;
use mt_core::services::diary::DiaryService;
use mt_core::services::mail::Mailer;
use mt_core::services::token::TokenCache;
use mt_core::services::user::UserService;

/// Shared application state holding the wired service layer
///
/// Generic over the core's collaborator traits so the whole HTTP layer can
/// be instantiated against either the real infrastructure or test doubles.
pub struct AppState<U, C, R, M, D>
where
    U: UserRepository,
    C: TokenCache,
    R: ResetTokenRepository,
    M: Mailer,
    D: DiaryRepository,
{
    pub auth_service: AuthService<U, C, R, M>,
    pub user_service: UserService<U>,
    pub diary_service: DiaryService<D>,
}

/// Register all API routes
pub fn configure<U, C, R, M, D>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    C: TokenCache + 'static,
    R: ResetTokenRepository + 'static,
    M: Mailer + 'static,
    D: DiaryRepository + 'static,
{
    cfg.route("/health", web::get().to(health))
        .service(
            web::scope("/auth")
                .route("/login", web::post().to(auth::login::login::<U, C, R, M, D>))
                .route("/logout", web::post().to(auth::logout::logout::<U, C, R, M, D>))
                .route("/refresh", web::post().to(auth::refresh::refresh::<U, C, R, M, D>))
                .route(
                    "/forgot-password",
                    web::post().to(auth::forgot_password::forgot_password::<U, C, R, M, D>),
                )
                .route(
                    "/reset-password",
                    web::post().to(auth::reset_password::reset_password::<U, C, R, M, D>),
                )
                .route("/me", web::get().to(auth::me::me::<U, C, R, M, D>)),
        )
        .service(
            web::scope("/users")
                .route("", web::post().to(users::register::<U, C, R, M, D>))
                .route("/{id}", web::patch().to(users::update::<U, C, R, M, D>))
                .route("/{id}", web::delete().to(users::delete::<U, C, R, M, D>)),
        )
        .service(
            web::scope("/diary")
                .route("/entries", web::get().to(diary::list_entries::<U, C, R, M, D>))
                .route("/entries", web::post().to(diary::add_entry::<U, C, R, M, D>))
                .route(
                    "/entries/{id}",
                    web::delete().to(diary::delete_entry::<U, C, R, M, D>),
                ),
        )
        .service(
            web::scope("/foods")
                .route("", web::post().to(foods::create_food::<U, C, R, M, D>))
                .route(
                    "/{barcode}",
                    web::get().to(foods::food_by_barcode::<U, C, R, M, D>),
                ),
        );
}

/// Handler for GET /health
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "mealtrack-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
