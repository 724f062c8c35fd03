//! Mock implementation of DiaryRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::diary::{DiaryEntry, Food};
use crate::errors::DomainError;

use super::r#trait::DiaryRepository;

/// Mock diary repository for testing
pub struct MockDiaryRepository {
    foods: Arc<RwLock<HashMap<i64, Food>>>,
    entries: Arc<RwLock<HashMap<i64, DiaryEntry>>>,
    next_id: AtomicI64,
}

impl MockDiaryRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            foods: Arc::new(RwLock::new(HashMap::new())),
            entries: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockDiaryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DiaryRepository for MockDiaryRepository {
    async fn insert_food(&self, mut food: Food) -> Result<Food, DomainError> {
        let mut foods = self.foods.write().await;

        if foods.values().any(|f| f.barcode == food.barcode) {
            return Err(DomainError::Conflict {
                message: "Food already exists".to_string(),
            });
        }

        food.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        foods.insert(food.id, food.clone());
        Ok(food)
    }

    async fn find_food_by_id(&self, id: i64) -> Result<Option<Food>, DomainError> {
        let foods = self.foods.read().await;
        Ok(foods.get(&id).cloned())
    }

    async fn find_food_by_barcode(&self, barcode: &str) -> Result<Option<Food>, DomainError> {
        let foods = self.foods.read().await;
        Ok(foods.values().find(|f| f.barcode == barcode).cloned())
    }

    async fn insert_entry(&self, mut entry: DiaryEntry) -> Result<DiaryEntry, DomainError> {
        let mut entries = self.entries.write().await;
        entry.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        entries.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn entries_for_user(&self, user_id: i64) -> Result<Vec<DiaryEntry>, DomainError> {
        let entries = self.entries.read().await;
        let mut result: Vec<DiaryEntry> = entries
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.added.cmp(&a.added).then(b.id.cmp(&a.id)));
        Ok(result)
    }

    async fn find_entry(&self, id: i64) -> Result<Option<DiaryEntry>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.get(&id).cloned())
    }

    async fn delete_entry(&self, id: i64) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(&id).is_some())
    }
}
