//! Diary repository trait for the food catalogue and diary entries.

use async_trait::async_trait;

use crate::domain::entities::diary::{DiaryEntry, Food};
use crate::errors::DomainError;

/// Repository trait for food and diary-entry persistence
#[async_trait]
pub trait DiaryRepository: Send + Sync {
    /// Insert a new food into the catalogue
    async fn insert_food(&self, food: Food) -> Result<Food, DomainError>;

    /// Find a food by its identifier
    async fn find_food_by_id(&self, id: i64) -> Result<Option<Food>, DomainError>;

    /// Find a food by its product barcode
    async fn find_food_by_barcode(&self, barcode: &str) -> Result<Option<Food>, DomainError>;

    /// Insert a new diary entry
    async fn insert_entry(&self, entry: DiaryEntry) -> Result<DiaryEntry, DomainError>;

    /// List all diary entries belonging to a user, newest first
    async fn entries_for_user(&self, user_id: i64) -> Result<Vec<DiaryEntry>, DomainError>;

    /// Find a diary entry by its identifier
    async fn find_entry(&self, id: i64) -> Result<Option<DiaryEntry>, DomainError>;

    /// Delete a diary entry
    ///
    /// Returns `true` if a row was removed.
    async fn delete_entry(&self, id: i64) -> Result<bool, DomainError>;
}
