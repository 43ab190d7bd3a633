use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::meals::{CreateMealRequest, MealList, UpdateMealRequest},
    error::AppResult,
    models::Meal,
    response::ApiResponse,
    routes::params::MealListQuery,
    services::meal_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_meals).post(create_meal))
        .route(
            "/{id}",
            get(get_meal).put(update_meal).delete(delete_meal),
        )
}

#[utoipa::path(
    get,
    path = "/api/meals",
    params(
        ("category_name" = Option<String>, Query, description = "Filter by category name")
    ),
    responses(
        (status = 200, description = "List meals with category names", body = ApiResponse<MealList>)
    ),
    tag = "Meals"
)]
pub async fn list_meals(
    State(state): State<AppState>,
    Query(query): Query<MealListQuery>,
) -> AppResult<Json<ApiResponse<MealList>>> {
    let resp = meal_service::list_meals(&state, query.category_name).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/meals/{id}",
    params(
        ("id" = i64, Path, description = "Meal ID")
    ),
    responses(
        (status = 200, description = "Get meal", body = ApiResponse<Meal>),
        (status = 404, description = "Meal not found"),
    ),
    tag = "Meals"
)]
pub async fn get_meal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Meal>>> {
    let resp = meal_service::get_meal(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/meals",
    request_body = CreateMealRequest,
    responses(
        (status = 200, description = "Create meal", body = ApiResponse<Meal>),
        (status = 400, description = "Unknown category or bad price"),
    ),
    tag = "Meals"
)]
pub async fn create_meal(
    State(state): State<AppState>,
    Json(payload): Json<CreateMealRequest>,
) -> AppResult<Json<ApiResponse<Meal>>> {
    let resp = meal_service::create_meal(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/meals/{id}",
    params(
        ("id" = i64, Path, description = "Meal ID")
    ),
    request_body = UpdateMealRequest,
    responses(
        (status = 200, description = "Updated meal", body = ApiResponse<Meal>),
        (status = 404, description = "Meal not found"),
    ),
    tag = "Meals"
)]
pub async fn update_meal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMealRequest>,
) -> AppResult<Json<ApiResponse<Meal>>> {
    let resp = meal_service::update_meal(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/meals/{id}",
    params(
        ("id" = i64, Path, description = "Meal ID")
    ),
    responses(
        (status = 200, description = "Deleted meal"),
        (status = 404, description = "Meal not found"),
    ),
    tag = "Meals"
)]
pub async fn delete_meal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = meal_service::delete_meal(&state, id).await?;
    Ok(Json(resp))
}
