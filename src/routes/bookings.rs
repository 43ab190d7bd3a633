use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};

use crate::{
    dto::bookings::{BookingList, BookingWithContextList, CreateBookingRequest,
        UpdateBookingStatusRequest},
    error::AppResult,
    models::Reservation,
    response::ApiResponse,
    services::booking_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bookings).post(create_booking))
        .route("/customer/{uuid}", get(list_customer_bookings))
        .route("/{id}", patch(update_booking_status))
}

#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 200, description = "Booking created (status pending)", body = ApiResponse<Reservation>),
        (status = 400, description = "Past date, bad party size or unknown table"),
    ),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<Json<ApiResponse<Reservation>>> {
    let resp = booking_service::create_booking(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    responses(
        (status = 200, description = "All bookings with customer and table context", body = ApiResponse<BookingWithContextList>)
    ),
    tag = "Bookings"
)]
pub async fn list_bookings(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<BookingWithContextList>>> {
    let resp = booking_service::list_bookings(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/bookings/customer/{uuid}",
    params(
        ("uuid" = String, Path, description = "Client-generated customer UUID")
    ),
    responses(
        (status = 200, description = "Bookings for one customer, newest first", body = ApiResponse<BookingList>)
    ),
    tag = "Bookings"
)]
pub async fn list_customer_bookings(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> AppResult<Json<ApiResponse<BookingList>>> {
    let resp = booking_service::list_customer_bookings(&state, &uuid).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/bookings/{id}",
    params(
        ("id" = i64, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingStatusRequest,
    responses(
        (status = 200, description = "Booking status updated", body = ApiResponse<Reservation>),
        (status = 400, description = "Illegal transition"),
        (status = 404, description = "Booking not found"),
    ),
    tag = "Bookings"
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBookingStatusRequest>,
) -> AppResult<Json<ApiResponse<Reservation>>> {
    let resp = booking_service::update_booking_status(&state, id, payload).await?;
    Ok(Json(resp))
}
