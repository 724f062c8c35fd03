//! Database integration tests
//!
//! These tests require a running MySQL instance with the MealTrack schema
//! applied; set DATABASE_URL before running them with `--ignored`.

use mt_core::domain::entities::user::User;
use mt_core::repositories::UserRepository;
use mt_infra::database::mysql::MySqlUserRepository;
use mt_infra::database::DatabasePool;
use mt_shared::config::DatabaseConfig;

async fn test_pool() -> DatabasePool {
    let mut config = DatabaseConfig::from_env();
    config.max_connections = 2;
    DatabasePool::new(&config).await.expect("database not reachable")
}

#[tokio::test]
#[ignore] // Requires actual MySQL server
async fn test_user_round_trip() {
    let pool = test_pool().await;
    let repo = MySqlUserRepository::new(pool.get_pool().clone());

    let user = repo
        .insert(User::new(
            format!("it_user_{}", chrono::Utc::now().timestamp_millis()),
            "it@example.com".to_string(),
            "$argon2id$stub".to_string(),
        ))
        .await
        .unwrap();
    assert!(user.id > 0);

    let found = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(found.username, user.username);

    let deleted = repo.delete(user.id).await.unwrap();
    assert!(deleted);
    assert!(repo.find_by_id(user.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires actual MySQL server
async fn test_health_check() {
    let pool = test_pool().await;
    assert!(pool.health_check().await.unwrap());
}
