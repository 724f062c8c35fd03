//! Food catalogue and diary entry entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalogued food item with per-100g nutrition facts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: i64,
    pub barcode: String,
    pub name: String,
    pub kcal_per_100g: f64,
    pub carbs_per_100g: f64,
    pub sugars_per_100g: f64,
    pub proteins_per_100g: f64,
    pub fats_per_100g: f64,
    pub saturated_fats_per_100g: f64,
    pub salt_per_100g: f64,
    pub fibers_per_100g: f64,
    pub nutriscore: i32,
}

/// A dated diary record linking a user to a quantity of a food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: i64,
    pub user_id: i64,
    pub food_id: i64,
    /// When the food was eaten
    pub added: DateTime<Utc>,
    /// Quantity in grams
    pub quantity: f64,
}

impl DiaryEntry {
    /// Creates a new entry timestamped now (id assigned by the database)
    pub fn new(user_id: i64, food_id: i64, quantity: f64) -> Self {
        Self {
            id: 0,
            user_id,
            food_id,
            added: Utc::now(),
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry() {
        let entry = DiaryEntry::new(1, 2, 150.0);

        assert_eq!(entry.user_id, 1);
        assert_eq!(entry.food_id, 2);
        assert_eq!(entry.quantity, 150.0);
        assert_eq!(entry.id, 0);
    }
}
