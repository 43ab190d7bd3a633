use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::chefs::{ChefList, CreateChefRequest, UpdateChefRequest},
    error::AppResult,
    models::Chef,
    response::ApiResponse,
    services::chef_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_chefs).post(create_chef))
        .route("/{id}", get(get_chef).put(update_chef).delete(delete_chef))
}

#[utoipa::path(
    get,
    path = "/api/chefs",
    responses(
        (status = 200, description = "List chefs", body = ApiResponse<ChefList>)
    ),
    tag = "Chefs"
)]
pub async fn list_chefs(State(state): State<AppState>) -> AppResult<Json<ApiResponse<ChefList>>> {
    let resp = chef_service::list_chefs(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/chefs/{id}",
    params(
        ("id" = i64, Path, description = "Chef ID")
    ),
    responses(
        (status = 200, description = "Get chef", body = ApiResponse<Chef>),
        (status = 404, description = "Chef not found"),
    ),
    tag = "Chefs"
)]
pub async fn get_chef(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Chef>>> {
    let resp = chef_service::get_chef(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/chefs",
    request_body = CreateChefRequest,
    responses(
        (status = 200, description = "Create chef", body = ApiResponse<Chef>),
        (status = 400, description = "Missing fullname"),
    ),
    tag = "Chefs"
)]
pub async fn create_chef(
    State(state): State<AppState>,
    Json(payload): Json<CreateChefRequest>,
) -> AppResult<Json<ApiResponse<Chef>>> {
    let resp = chef_service::create_chef(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/chefs/{id}",
    params(
        ("id" = i64, Path, description = "Chef ID")
    ),
    request_body = UpdateChefRequest,
    responses(
        (status = 200, description = "Updated chef", body = ApiResponse<Chef>),
        (status = 404, description = "Chef not found"),
    ),
    tag = "Chefs"
)]
pub async fn update_chef(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateChefRequest>,
) -> AppResult<Json<ApiResponse<Chef>>> {
    let resp = chef_service::update_chef(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/chefs/{id}",
    params(
        ("id" = i64, Path, description = "Chef ID")
    ),
    responses(
        (status = 200, description = "Deleted chef"),
        (status = 404, description = "Chef not found"),
    ),
    tag = "Chefs"
)]
pub async fn delete_chef(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = chef_service::delete_chef(&state, id).await?;
    Ok(Json(resp))
}
