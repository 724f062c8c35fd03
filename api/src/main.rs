use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};
use std::sync::Arc;

use mt_api::middleware::auth::AccessTokenVerifier;
use mt_api::middleware::cors;
use mt_api::routes::{self, AppState};
use mt_core::services::auth::{AuthService, PasswordHasher};
use mt_core::services::diary::DiaryService;
use mt_core::services::token::{TokenService, TokenServiceConfig};
use mt_core::services::user::UserService;
use mt_infra::cache::{RedisClient, RedisTokenCache};
use mt_infra::database::mysql::{
    MySqlDiaryRepository, MySqlResetTokenRepository, MySqlUserRepository,
};
use mt_infra::database::DatabasePool;
use mt_infra::mail::HttpMailClient;
use mt_shared::config::{CacheConfig, DatabaseConfig, JwtConfig, MailConfig, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting MealTrack API server");

    let jwt_config = JwtConfig::from_env();
    if jwt_config.is_using_default_secret() {
        warn!("JWT secrets are development defaults; set JWT_SECRET and JWT_REFRESH_SECRET");
    }

    let server_config = ServerConfig::from_env();

    // Infrastructure
    let pool = DatabasePool::new(&DatabaseConfig::from_env())
        .await
        .expect("failed to create database pool");
    let redis = RedisClient::new(&CacheConfig::from_env())
        .await
        .expect("failed to connect to Redis");
    let mailer = Arc::new(
        HttpMailClient::new(MailConfig::from_env()).expect("failed to build mail client"),
    );

    let users = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let reset_tokens = Arc::new(MySqlResetTokenRepository::new(pool.get_pool().clone()));
    let diary = Arc::new(MySqlDiaryRepository::new(pool.get_pool().clone()));

    // Services
    let token_service = Arc::new(TokenService::new(
        Arc::new(RedisTokenCache::new(redis)),
        TokenServiceConfig {
            access_secret: jwt_config.secret.clone(),
            refresh_secret: jwt_config.refresh_secret.clone(),
        },
    ));
    let verifier: Arc<dyn AccessTokenVerifier> = token_service.clone();
    let hasher = PasswordHasher::new().expect("invalid password hasher parameters");

    let state = web::Data::new(AppState {
        auth_service: AuthService::new(
            users.clone(),
            token_service,
            reset_tokens,
            mailer,
            hasher.clone(),
        ),
        user_service: UserService::new(users, hasher),
        diary_service: DiaryService::new(diary),
    });
    let verifier_data = web::Data::new(verifier);

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors::create_cors())
            .app_data(state.clone())
            .app_data(verifier_data.clone())
            .configure(
                routes::configure::<
                    MySqlUserRepository,
                    RedisTokenCache,
                    MySqlResetTokenRepository,
                    HttpMailClient,
                    MySqlDiaryRepository,
                >,
            )
            .default_service(web::route().to(not_found))
    })
    .bind(&bind_address)?
    .run()
    .await
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
