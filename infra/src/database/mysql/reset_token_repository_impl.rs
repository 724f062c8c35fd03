//! MySQL implementation of the ResetTokenRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use mt_core::domain::entities::reset_token::PasswordResetToken;
use mt_core::errors::DomainError;
use mt_core::repositories::ResetTokenRepository;

use super::db_err;

/// MySQL implementation of ResetTokenRepository
///
/// Rows hold only SHA-256 digests of reset tokens, never the plaintext.
pub struct MySqlResetTokenRepository {
    pool: MySqlPool,
}

impl MySqlResetTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<PasswordResetToken, DomainError> {
        Ok(PasswordResetToken {
            id: row.try_get("id").map_err(db_err)?,
            token_hash: row.try_get("token_hash").map_err(db_err)?,
            user_id: row.try_get("user_id").map_err(db_err)?,
            expiry: row
                .try_get::<DateTime<Utc>, _>("expiry")
                .map_err(db_err)?,
        })
    }
}

#[async_trait]
impl ResetTokenRepository for MySqlResetTokenRepository {
    async fn save(&self, mut token: PasswordResetToken) -> Result<PasswordResetToken, DomainError> {
        let query = r#"
            INSERT INTO password_reset_tokens (token_hash, user_id, expiry)
            VALUES (?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&token.token_hash)
            .bind(token.user_id)
            .bind(token.expiry)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        token.id = result.last_insert_id() as i64;
        Ok(token)
    }

    async fn find_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<PasswordResetToken>, DomainError> {
        let query = r#"
            SELECT id, token_hash, user_id, expiry
            FROM password_reset_tokens
            WHERE token_hash = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        result.as_ref().map(Self::row_to_token).transpose()
    }

    async fn delete_for_user(&self, user_id: i64) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM password_reset_tokens WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected() as usize)
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM password_reset_tokens WHERE expiry < ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected() as usize)
    }
}
