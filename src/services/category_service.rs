use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, SqlErr};

use crate::{
    audit::log_audit,
    dto::categories::{CategoryList, CreateCategoryRequest, UpdateCategoryRequest},
    entity::categories::{ActiveModel as CategoryActive, Column, Entity as Categories,
        Model as CategoryModel},
    error::{AppError, AppResult},
    models::Category,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let items = Categories::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(category_from_entity)
        .collect();

    Ok(ApiResponse::success(
        "Categories",
        CategoryList { items },
        Some(Meta::empty()),
    ))
}

pub async fn get_category(state: &AppState, id: i64) -> AppResult<ApiResponse<Category>> {
    let found = Categories::find_by_id(id).one(&state.orm).await?;
    let category = match found {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success(
        "Category",
        category_from_entity(category),
        None,
    ))
}

pub async fn create_category(
    state: &AppState,
    payload: CreateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::InvalidInput("name is required".into()));
    }

    let active = CategoryActive {
        id: NotSet,
        name: Set(name),
        description: Set(payload.description),
    };
    let category = match active.insert(&state.orm).await {
        Ok(c) => c,
        Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            return Err(AppError::InvalidInput("category name already exists".into()));
        }
        Err(err) => return Err(err.into()),
    };

    if let Err(err) = log_audit(
        &state.pool,
        None,
        "category_create",
        Some("categories"),
        Some(serde_json::json!({ "category_id": category.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Category added successfully",
        category_from_entity(category),
        Some(Meta::empty()),
    ))
}

pub async fn update_category(
    state: &AppState,
    id: i64,
    payload: UpdateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    let existing = Categories::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };

    let mut active: CategoryActive = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }

    let category = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Category updated successfully",
        category_from_entity(category),
        Some(Meta::empty()),
    ))
}

pub async fn delete_category(
    state: &AppState,
    id: i64,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Categories::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Category deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub fn category_from_entity(model: CategoryModel) -> Category {
    Category {
        id: model.id,
        name: model.name,
        description: model.description,
    }
}
