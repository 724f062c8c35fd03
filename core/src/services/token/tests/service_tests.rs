//! Tests for the token service

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::domain::entities::token::Claims;
use crate::errors::DomainError;
use crate::services::token::{
    CachedSubject, MockTokenCache, TokenCache, TokenService, TokenServiceConfig,
};

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        access_secret: "access-test-secret".to_string(),
        refresh_secret: "refresh-test-secret".to_string(),
    }
}

fn service_with_cache() -> (TokenService<MockTokenCache>, Arc<MockTokenCache>) {
    let cache = Arc::new(MockTokenCache::new());
    let service = TokenService::new(cache.clone(), test_config());
    (service, cache)
}

/// Sign refresh-token claims directly, bypassing the service
fn sign_refresh(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[tokio::test]
async fn test_issue_then_validate_returns_subject() {
    let (service, _cache) = service_with_cache();

    let pair = service.issue(42).await.unwrap();
    let user_id = service.validate_refresh_token(&pair.refresh_token).await.unwrap();

    assert_eq!(user_id, 42);
}

#[tokio::test]
async fn test_issued_tokens_carry_expected_claims() {
    let (service, cache) = service_with_cache();

    let pair = service.issue(42).await.unwrap();

    let access = service.verify_access_token(&pair.access_token).unwrap();
    assert_eq!(access.sub, 42);
    let access_remaining = access.exp - Utc::now().timestamp();
    assert!(access_remaining > 4 * 60 && access_remaining <= 5 * 60);

    let cached = cache.get(&pair.refresh_token).await.unwrap().unwrap();
    assert_eq!(cached.user_id, 42);
}

#[tokio::test]
async fn test_refresh_rotates_and_invalidates_old_token() {
    let (service, _cache) = service_with_cache();

    let pair = service.issue(7).await.unwrap();
    let new_pair = service.refresh(&pair.refresh_token).await.unwrap();

    assert_ne!(new_pair.refresh_token, pair.refresh_token);
    assert_eq!(
        service.validate_refresh_token(&new_pair.refresh_token).await.unwrap(),
        7
    );

    let err = service
        .validate_refresh_token(&pair.refresh_token)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_refresh_is_single_use() {
    let (service, _cache) = service_with_cache();

    let pair = service.issue(7).await.unwrap();
    service.refresh(&pair.refresh_token).await.unwrap();

    let err = service.refresh(&pair.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_tokens_for_same_subject_are_distinct() {
    let (service, _cache) = service_with_cache();

    // Same subject, same second: the jti must still keep them apart
    let first = service.issue(7).await.unwrap();
    let second = service.issue(7).await.unwrap();

    assert_ne!(first.refresh_token, second.refresh_token);
    assert_ne!(first.access_token, second.access_token);
}

#[tokio::test]
async fn test_concurrent_refreshes_have_one_winner() {
    let (service, _cache) = service_with_cache();
    let service = Arc::new(service);

    let pair = service.issue(7).await.unwrap();

    let a = tokio::spawn({
        let service = service.clone();
        let token = pair.refresh_token.clone();
        async move { service.refresh(&token).await }
    });
    let b = tokio::spawn({
        let service = service.clone();
        let token = pair.refresh_token.clone();
        async move { service.refresh(&token).await }
    });

    let (a, b) = (a.await.unwrap(), b.await.unwrap());
    assert_eq!(
        a.is_ok() as u32 + b.is_ok() as u32,
        1,
        "exactly one concurrent refresh may win"
    );

    // Either way the original token is gone
    let err = service.refresh(&pair.refresh_token).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_logout_invalidates_token() {
    let (service, cache) = service_with_cache();

    let pair = service.issue(3).await.unwrap();
    service.logout(&pair.refresh_token).await.unwrap();

    assert_eq!(cache.len().await, 0);
    let err = service
        .validate_refresh_token(&pair.refresh_token)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_logout_requires_valid_token() {
    let (service, _cache) = service_with_cache();

    let err = service.logout("not-a-token").await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_valid_signature_absent_from_cache_fails() {
    let (service, cache) = service_with_cache();

    // Correctly signed, but never registered in the cache
    let token = sign_refresh(&Claims::new_refresh_token(9), "refresh-test-secret");

    let err = service.validate_refresh_token(&token).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized { .. }));
    assert_eq!(cache.len().await, 0);
}

#[tokio::test]
async fn test_cached_token_with_wrong_secret_fails() {
    let (service, cache) = service_with_cache();

    let token = sign_refresh(&Claims::new_refresh_token(9), "some-other-secret");
    cache
        .set(&token, CachedSubject { user_id: 9 }, 60_000)
        .await
        .unwrap();

    let err = service.validate_refresh_token(&token).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_subject_mismatch_between_claim_and_cache_fails() {
    let (service, cache) = service_with_cache();

    let token = sign_refresh(&Claims::new_refresh_token(9), "refresh-test-secret");
    cache
        .set(&token, CachedSubject { user_id: 10 }, 60_000)
        .await
        .unwrap();

    let err = service.validate_refresh_token(&token).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_expired_but_cached_token_self_heals_cache() {
    let (service, cache) = service_with_cache();

    // Expired well past the default validation leeway
    let mut claims = Claims::new_refresh_token(5);
    claims.exp = Utc::now().timestamp() - 300;
    let token = sign_refresh(&claims, "refresh-test-secret");

    cache
        .set(&token, CachedSubject { user_id: 5 }, 60_000)
        .await
        .unwrap();

    let err = service.validate_refresh_token(&token).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized { .. }));
    // The stale cache entry was deleted as a side effect
    assert!(cache.get(&token).await.unwrap().is_none());
}

#[tokio::test]
async fn test_access_token_rejected_as_refresh_token() {
    let (service, cache) = service_with_cache();

    let pair = service.issue(1).await.unwrap();
    // Planting the access token in the cache must not make it refreshable
    cache
        .set(&pair.access_token, CachedSubject { user_id: 1 }, 60_000)
        .await
        .unwrap();

    let err = service
        .validate_refresh_token(&pair.access_token)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized { .. }));
}

#[tokio::test]
async fn test_verify_access_token_rejects_refresh_token() {
    let (service, _cache) = service_with_cache();

    let pair = service.issue(1).await.unwrap();
    assert!(service.verify_access_token(&pair.refresh_token).is_err());
    assert!(service.verify_access_token(&pair.access_token).is_ok());
}
