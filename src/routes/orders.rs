use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    routing::put,
};

use crate::{
    dto::orders::{OrderPlacedResponse, OrderSummaryList, PlaceOrderRequest,
        UpdateOrderStatusRequest},
    error::AppResult,
    models::Order,
    response::ApiResponse,
    routes::params::Pagination,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(place_order))
        .route("/{id}", put(update_order_status).delete(delete_order))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = OrderPlacedResponse),
        (status = 400, description = "Invalid input or no fulfillment method"),
        (status = 404, description = "Unknown meal in items"),
    ),
    tag = "Orders"
)]
pub async fn place_order(
    State(state): State<AppState>,
    Json(payload): Json<PlaceOrderRequest>,
) -> AppResult<(StatusCode, Json<OrderPlacedResponse>)> {
    let resp = order_service::place_order(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "All orders with customer and item summaries", body = ApiResponse<OrderSummaryList>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<OrderSummaryList>>> {
    let resp = order_service::list_orders(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Order status updated", body = ApiResponse<Order>),
        (status = 400, description = "Missing or unknown status"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = order_service::update_order_status(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(
        ("id" = i64, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = order_service::delete_order(&state, id).await?;
    Ok(Json(resp))
}
