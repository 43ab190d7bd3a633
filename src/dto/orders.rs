use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Order;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrderItemRequest {
    /// Meal id from the catalog.
    pub id: i64,
    pub quantity: i32,
    /// Client-side display price in dollars; ignored in favor of the
    /// catalog price.
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CustomerInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrderInfo {
    /// "delivery" or "table".
    #[serde(rename = "type")]
    pub order_type: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    #[serde(rename = "paymentMethod")]
    pub payment_method: Option<String>,
    #[serde(rename = "tableId")]
    pub table_id: Option<i64>,
    #[serde(rename = "paymentIntentId")]
    pub payment_intent_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PaymentInfo {
    pub method: String,
    /// Dollars.
    pub amount: f64,
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub items: Vec<OrderItemRequest>,
    pub customer_uuid: Option<String>,
    /// Dollars; must match the catalog recomputation.
    pub total: Option<f64>,
    pub status: Option<String>,
    pub customer_info: Option<CustomerInfo>,
    pub order_info: Option<OrderInfo>,
    pub payment_info: Option<PaymentInfo>,
}

/// Reservation details echoed back when an order was attached to one.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReservationSummary {
    pub id: i64,
    pub table_number: Option<i32>,
    pub booking_date: chrono::DateTime<chrono::Utc>,
    pub number_of_guests: i32,
}

/// Flat 201 body; the storefront reads these fields directly rather than
/// through the usual envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderPlacedResponse {
    pub message: String,
    pub order_uuid: Uuid,
    pub customer_id: i64,
    pub order_id: i64,
    pub reservation: Option<ReservationSummary>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

/// Admin listing row: order fields plus the customer name and aggregated
/// item columns the dashboard renders.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderSummary {
    #[serde(flatten)]
    pub order: Order,
    pub customer_name: Option<String>,
    pub meal_ids: Option<String>,
    pub meal_names: Option<String>,
    pub quantities: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderSummaryList {
    pub items: Vec<OrderSummary>,
}
