//! Bearer-token request guard.
//!
//! Protected routes take an [`AuthContext`] parameter; extraction verifies
//! the access token from the Authorization header against the verifier
//! registered in app data and fails the request with 401 otherwise.

use actix_web::error::{ErrorInternalServerError, ErrorUnauthorized};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, FromRequest, HttpRequest};
use std::future::{ready, Ready};
use std::sync::Arc;

use mt_core::domain::entities::token::Claims;
use mt_core::errors::DomainError;
use mt_core::services::token::{TokenCache, TokenService};

/// Authenticated user context injected into handlers
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    /// Subject id from the verified access token
    pub user_id: i64,
}

/// Object-safe access-token verification, so handlers do not need the
/// token service's cache type parameter
pub trait AccessTokenVerifier: Send + Sync {
    fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError>;
}

impl<C: TokenCache> AccessTokenVerifier for TokenService<C> {
    fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        TokenService::verify_access_token(self, token)
    }
}

/// Extracts a Bearer token from the Authorization header
fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let verify = || {
            let verifier = req
                .app_data::<web::Data<Arc<dyn AccessTokenVerifier>>>()
                .ok_or_else(|| ErrorInternalServerError("Token verification not configured"))?;

            let token = extract_bearer_token(req)
                .ok_or_else(|| ErrorUnauthorized("Missing or invalid Authorization header"))?;

            let claims = verifier
                .verify_access_token(&token)
                .map_err(|_| ErrorUnauthorized("Invalid access token"))?;

            Ok(AuthContext {
                user_id: claims.sub,
            })
        };

        ready(verify())
    }
}
