//! MySQL implementation of the DiaryRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use mt_core::domain::entities::diary::{DiaryEntry, Food};
use mt_core::errors::DomainError;
use mt_core::repositories::DiaryRepository;

use super::db_err;

/// MySQL implementation of DiaryRepository
pub struct MySqlDiaryRepository {
    pool: MySqlPool,
}

impl MySqlDiaryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_food(row: &sqlx::mysql::MySqlRow) -> Result<Food, DomainError> {
        Ok(Food {
            id: row.try_get("id").map_err(db_err)?,
            barcode: row.try_get("barcode").map_err(db_err)?,
            name: row.try_get("name").map_err(db_err)?,
            kcal_per_100g: row.try_get("kcal_per_100g").map_err(db_err)?,
            carbs_per_100g: row.try_get("carbs_per_100g").map_err(db_err)?,
            sugars_per_100g: row.try_get("sugars_per_100g").map_err(db_err)?,
            proteins_per_100g: row.try_get("proteins_per_100g").map_err(db_err)?,
            fats_per_100g: row.try_get("fats_per_100g").map_err(db_err)?,
            saturated_fats_per_100g: row.try_get("saturated_fats_per_100g").map_err(db_err)?,
            salt_per_100g: row.try_get("salt_per_100g").map_err(db_err)?,
            fibers_per_100g: row.try_get("fibers_per_100g").map_err(db_err)?,
            nutriscore: row.try_get("nutriscore").map_err(db_err)?,
        })
    }

    fn row_to_entry(row: &sqlx::mysql::MySqlRow) -> Result<DiaryEntry, DomainError> {
        Ok(DiaryEntry {
            id: row.try_get("id").map_err(db_err)?,
            user_id: row.try_get("user_id").map_err(db_err)?,
            food_id: row.try_get("food_id").map_err(db_err)?,
            added: row.try_get::<DateTime<Utc>, _>("added").map_err(db_err)?,
            quantity: row.try_get("quantity").map_err(db_err)?,
        })
    }
}

const FOOD_COLUMNS: &str = "SELECT id, barcode, name, kcal_per_100g, carbs_per_100g, \
    sugars_per_100g, proteins_per_100g, fats_per_100g, saturated_fats_per_100g, \
    salt_per_100g, fibers_per_100g, nutriscore FROM foods";

#[async_trait]
impl DiaryRepository for MySqlDiaryRepository {
    async fn insert_food(&self, mut food: Food) -> Result<Food, DomainError> {
        let query = r#"
            INSERT INTO foods (
                barcode, name, kcal_per_100g, carbs_per_100g, sugars_per_100g,
                proteins_per_100g, fats_per_100g, saturated_fats_per_100g,
                salt_per_100g, fibers_per_100g, nutriscore
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&food.barcode)
            .bind(&food.name)
            .bind(food.kcal_per_100g)
            .bind(food.carbs_per_100g)
            .bind(food.sugars_per_100g)
            .bind(food.proteins_per_100g)
            .bind(food.fats_per_100g)
            .bind(food.saturated_fats_per_100g)
            .bind(food.salt_per_100g)
            .bind(food.fibers_per_100g)
            .bind(food.nutriscore)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    DomainError::Conflict {
                        message: "Food already exists".to_string(),
                    }
                }
                other => db_err(other),
            })?;

        food.id = result.last_insert_id() as i64;
        Ok(food)
    }

    async fn find_food_by_id(&self, id: i64) -> Result<Option<Food>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", FOOD_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        result.as_ref().map(Self::row_to_food).transpose()
    }

    async fn find_food_by_barcode(&self, barcode: &str) -> Result<Option<Food>, DomainError> {
        let query = format!("{} WHERE barcode = ? LIMIT 1", FOOD_COLUMNS);

        let result = sqlx::query(&query)
            .bind(barcode)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        result.as_ref().map(Self::row_to_food).transpose()
    }

    async fn insert_entry(&self, mut entry: DiaryEntry) -> Result<DiaryEntry, DomainError> {
        let query = r#"
            INSERT INTO diary_entries (user_id, food_id, added, quantity)
            VALUES (?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(entry.user_id)
            .bind(entry.food_id)
            .bind(entry.added)
            .bind(entry.quantity)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        entry.id = result.last_insert_id() as i64;
        Ok(entry)
    }

    async fn entries_for_user(&self, user_id: i64) -> Result<Vec<DiaryEntry>, DomainError> {
        let query = r#"
            SELECT id, user_id, food_id, added, quantity
            FROM diary_entries
            WHERE user_id = ?
            ORDER BY added DESC, id DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        rows.iter().map(Self::row_to_entry).collect()
    }

    async fn find_entry(&self, id: i64) -> Result<Option<DiaryEntry>, DomainError> {
        let query = r#"
            SELECT id, user_id, food_id, added, quantity
            FROM diary_entries
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        result.as_ref().map(Self::row_to_entry).transpose()
    }

    async fn delete_entry(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM diary_entries WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected() > 0)
    }
}
