//! Food catalogue and diary service.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::diary::{DiaryEntry, Food};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::DiaryRepository;

/// Food catalogue and per-user diary service
///
/// Diary entries are strictly private to their owner; every read and delete
/// takes the acting user's id and enforces ownership.
pub struct DiaryService<D: DiaryRepository> {
    diary: Arc<D>,
}

impl<D: DiaryRepository> DiaryService<D> {
    pub fn new(diary: Arc<D>) -> Self {
        Self { diary }
    }

    /// Adds a food item to the shared catalogue
    pub async fn add_food(&self, food: Food) -> DomainResult<Food> {
        let food = self.diary.insert_food(food).await?;
        info!(food_id = food.id, barcode = %food.barcode, "Food catalogued");
        Ok(food)
    }

    /// Looks up a catalogued food by barcode
    pub async fn food_by_barcode(&self, barcode: &str) -> DomainResult<Food> {
        self.diary
            .find_food_by_barcode(barcode)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Food with barcode {}", barcode),
            })
    }

    /// Records that a user ate a quantity of a catalogued food
    pub async fn add_entry(
        &self,
        user_id: i64,
        food_id: i64,
        quantity: f64,
    ) -> DomainResult<DiaryEntry> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(DomainError::Validation {
                message: "Quantity must be a positive number of grams".to_string(),
            });
        }

        if self.diary.find_food_by_id(food_id).await?.is_none() {
            return Err(DomainError::NotFound {
                resource: format!("Food {}", food_id),
            });
        }

        self.diary
            .insert_entry(DiaryEntry::new(user_id, food_id, quantity))
            .await
    }

    /// Lists a user's diary entries, newest first
    pub async fn entries(&self, user_id: i64) -> DomainResult<Vec<DiaryEntry>> {
        self.diary.entries_for_user(user_id).await
    }

    /// Deletes a diary entry owned by the acting user
    pub async fn delete_entry(&self, user_id: i64, entry_id: i64) -> DomainResult<()> {
        let entry = self
            .diary
            .find_entry(entry_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("Diary entry {}", entry_id),
            })?;

        if entry.user_id != user_id {
            return Err(DomainError::Unauthorized {
                message: "User id mismatch".to_string(),
            });
        }

        self.diary.delete_entry(entry_id).await?;
        Ok(())
    }
}
