use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use mt_core::domain::entities::diary::{DiaryEntry, Food};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodRequest {
    #[validate(length(min = 1, max = 64))]
    pub barcode: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub kcal_per_100g: f64,
    pub carbs_per_100g: f64,
    pub sugars_per_100g: f64,
    pub proteins_per_100g: f64,
    pub fats_per_100g: f64,
    pub saturated_fats_per_100g: f64,
    pub salt_per_100g: f64,
    pub fibers_per_100g: f64,
    #[validate(range(min = 1, max = 5))]
    pub nutriscore: i32,
}

impl From<CreateFoodRequest> for Food {
    fn from(request: CreateFoodRequest) -> Self {
        Food {
            id: 0,
            barcode: request.barcode,
            name: request.name,
            kcal_per_100g: request.kcal_per_100g,
            carbs_per_100g: request.carbs_per_100g,
            sugars_per_100g: request.sugars_per_100g,
            proteins_per_100g: request.proteins_per_100g,
            fats_per_100g: request.fats_per_100g,
            saturated_fats_per_100g: request.saturated_fats_per_100g,
            salt_per_100g: request.salt_per_100g,
            fibers_per_100g: request.fibers_per_100g,
            nutriscore: request.nutriscore,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodResponse {
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

impl From<Food> for FoodResponse {
    fn from(food: Food) -> Self {
        Self {
            id: food.id,
            barcode: food.barcode,
            name: food.name,
            kcal_per_100g: food.kcal_per_100g,
            carbs_per_100g: food.carbs_per_100g,
            sugars_per_100g: food.sugars_per_100g,
            proteins_per_100g: food.proteins_per_100g,
            fats_per_100g: food.fats_per_100g,
            saturated_fats_per_100g: food.saturated_fats_per_100g,
            salt_per_100g: food.salt_per_100g,
            fibers_per_100g: food.fibers_per_100g,
            nutriscore: food.nutriscore,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEntryRequest {
    pub food_id: i64,
    pub quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub id: i64,
    pub food_id: i64,
    pub added: DateTime<Utc>,
    pub quantity: f64,
}

impl From<DiaryEntry> for EntryResponse {
    fn from(entry: DiaryEntry) -> Self {
        Self {
            id: entry.id,
            food_id: entry.food_id,
            added: entry.added,
            quantity: entry.quantity,
        }
    }
}
