use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    error::AppResult,
    models::Customer,
    response::ApiResponse,
    services::customer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/{uuid}", get(get_customer))
}

#[utoipa::path(
    get,
    path = "/api/customers/{uuid}",
    params(
        ("uuid" = String, Path, description = "Client-generated customer UUID")
    ),
    responses(
        (status = 200, description = "Customer record, created on first sight", body = ApiResponse<Customer>),
        (status = 400, description = "Empty UUID"),
    ),
    tag = "Customers"
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> AppResult<Json<ApiResponse<Customer>>> {
    let resp = customer_service::get_or_create_customer(&state, &uuid).await?;
    Ok(Json(resp))
}
