use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: i64,
    /// Client-generated opaque identifier; the only correlation key the
    /// storefront has, since there is no login system.
    pub uuid: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DiningTable {
    pub id: i64,
    pub table_number: i32,
    pub capacity: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Reservation {
    pub id: i64,
    pub customer_id: i64,
    pub table_id: Option<i64>,
    pub reservation_time: DateTime<Utc>,
    pub number_of_people: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    /// Public random token, distinct from the sequential id so orders
    /// cannot be enumerated.
    pub uuid: Uuid,
    pub order_date: DateTime<Utc>,
    pub status: String,
    /// Dollars.
    pub total_price: f64,
    pub delivery_address: Option<String>,
    pub reservation_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub meal_id: i64,
    pub quantity: i32,
    /// Dollars; copied from the catalog at order time.
    pub price: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    pub id: i64,
    pub order_id: i64,
    pub method: String,
    pub amount: f64,
    pub status: String,
    pub paid_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meal {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: i64,
    pub category_name: Option<String>,
    pub pic: Option<String>,
    pub made_by: Option<String>,
    pub rating: Option<f32>,
    pub popularity: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Chef {
    pub id: i64,
    pub fullname: String,
    pub specialization: String,
    pub pic: Option<String>,
    pub about: Option<String>,
}
