//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use mt_core::domain::entities::user::User;
use mt_core::errors::DomainError;
use mt_core::repositories::UserRepository;

use super::db_err;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: row.try_get("id").map_err(db_err)?,
            username: row.try_get("username").map_err(db_err)?,
            email: row.try_get("email").map_err(db_err)?,
            password_hash: row.try_get("password_hash").map_err(db_err)?,
            first_name: row.try_get("first_name").map_err(db_err)?,
            last_name: row.try_get("last_name").map_err(db_err)?,
            is_active: row.try_get("is_active").map_err(db_err)?,
        })
    }
}

const SELECT_COLUMNS: &str =
    "SELECT id, username, email, password_hash, first_name, last_name, is_active FROM users";

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE username = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE email = ? LIMIT 1", SELECT_COLUMNS);

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn insert(&self, mut user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (username, email, password_hash, first_name, last_name, is_active)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.is_active)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DomainError::Conflict {
                        message: "User already exists".to_string(),
                    }
                }
                other => db_err(other),
            })?;

        user.id = result.last_insert_id() as i64;
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                username = ?,
                email = ?,
                password_hash = ?,
                first_name = ?,
                last_name = ?,
                is_active = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.is_active)
            .bind(user.id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("User {}", user.id),
            });
        }

        Ok(user)
    }

    async fn update_password(&self, user_id: i64, password_hash: &str) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE users SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("User {}", user_id),
            });
        }

        Ok(())
    }

    async fn delete(&self, user_id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected() > 0)
    }
}
