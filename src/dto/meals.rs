use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Meal;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMealRequest {
    pub name: String,
    pub description: Option<String>,
    /// Dollars.
    pub price: f64,
    pub category_id: i64,
    pub pic: Option<String>,
    pub made_by: Option<String>,
    pub rating: Option<f32>,
    pub popularity: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMealRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<i64>,
    pub pic: Option<String>,
    pub made_by: Option<String>,
    pub rating: Option<f32>,
    pub popularity: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MealList {
    pub items: Vec<Meal>,
}
