use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Reservation;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookingRequest {
    pub customer_uuid: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub reservation_time: DateTime<Utc>,
    pub number_of_people: i32,
    pub table_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingList {
    pub items: Vec<Reservation>,
}

/// Admin listing row with the joined customer and table context.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingWithContext {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub customer_name: Option<String>,
    pub customer_uuid: String,
    pub table_number: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingWithContextList {
    pub items: Vec<BookingWithContext>,
}
