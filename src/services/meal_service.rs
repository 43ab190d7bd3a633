use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    audit::log_audit,
    dto::meals::{CreateMealRequest, MealList, UpdateMealRequest},
    entity::{
        categories::{self, Entity as Categories},
        meals::{ActiveModel as MealActive, Column, Entity as Meals, Model as MealModel},
    },
    error::{AppError, AppResult},
    models::Meal,
    money,
    response::{ApiResponse, Meta},
    state::AppState,
};

/// List meals joined with their category name, optionally filtered by it.
pub async fn list_meals(
    state: &AppState,
    category_name: Option<String>,
) -> AppResult<ApiResponse<MealList>> {
    let mut finder = Meals::find()
        .find_also_related(Categories)
        .order_by_asc(Column::Id);

    if let Some(name) = category_name.filter(|n| !n.is_empty()) {
        finder = finder.filter(categories::Column::Name.eq(name));
    }

    let items = finder
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(meal, category)| meal_from_entity(meal, category.map(|c| c.name)))
        .collect();

    Ok(ApiResponse::success(
        "Meals",
        MealList { items },
        Some(Meta::empty()),
    ))
}

pub async fn get_meal(state: &AppState, id: i64) -> AppResult<ApiResponse<Meal>> {
    let found = Meals::find_by_id(id)
        .find_also_related(Categories)
        .one(&state.orm)
        .await?;
    let (meal, category) = match found {
        Some(pair) => pair,
        None => return Err(AppError::NotFound),
    };

    Ok(ApiResponse::success(
        "Meal",
        meal_from_entity(meal, category.map(|c| c.name)),
        None,
    ))
}

pub async fn create_meal(
    state: &AppState,
    payload: CreateMealRequest,
) -> AppResult<ApiResponse<Meal>> {
    let price_cents = money::validate_amount(payload.price)?;
    let category = Categories::find_by_id(payload.category_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| {
            AppError::InvalidInput(format!("unknown category {}", payload.category_id))
        })?;

    let meal = MealActive {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        price: Set(price_cents),
        category_id: Set(category.id),
        pic: Set(payload.pic),
        made_by: Set(payload.made_by),
        rating: Set(payload.rating),
        popularity: Set(payload.popularity),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    if let Err(err) = log_audit(
        &state.pool,
        None,
        "meal_create",
        Some("meals"),
        Some(serde_json::json!({ "meal_id": meal.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Meal added successfully",
        meal_from_entity(meal, Some(category.name)),
        Some(Meta::empty()),
    ))
}

pub async fn update_meal(
    state: &AppState,
    id: i64,
    payload: UpdateMealRequest,
) -> AppResult<ApiResponse<Meal>> {
    let existing = Meals::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(m) => m,
        None => return Err(AppError::NotFound),
    };

    let mut active: MealActive = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(Some(description));
    }
    if let Some(price) = payload.price {
        active.price = Set(money::validate_amount(price)?);
    }
    if let Some(category_id) = payload.category_id {
        let exists = Categories::find_by_id(category_id).one(&state.orm).await?;
        if exists.is_none() {
            return Err(AppError::InvalidInput(format!(
                "unknown category {category_id}"
            )));
        }
        active.category_id = Set(category_id);
    }
    if let Some(pic) = payload.pic {
        active.pic = Set(Some(pic));
    }
    if let Some(made_by) = payload.made_by {
        active.made_by = Set(Some(made_by));
    }
    if let Some(rating) = payload.rating {
        active.rating = Set(Some(rating));
    }
    if let Some(popularity) = payload.popularity {
        active.popularity = Set(Some(popularity));
    }

    let meal = active.update(&state.orm).await?;
    let category = Categories::find_by_id(meal.category_id)
        .one(&state.orm)
        .await?;

    if let Err(err) = log_audit(
        &state.pool,
        None,
        "meal_update",
        Some("meals"),
        Some(serde_json::json!({ "meal_id": meal.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Meal updated successfully",
        meal_from_entity(meal, category.map(|c| c.name)),
        Some(Meta::empty()),
    ))
}

pub async fn delete_meal(state: &AppState, id: i64) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Meals::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    if let Err(err) = log_audit(
        &state.pool,
        None,
        "meal_delete",
        Some("meals"),
        Some(serde_json::json!({ "meal_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Meal deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub fn meal_from_entity(model: MealModel, category_name: Option<String>) -> Meal {
    Meal {
        id: model.id,
        name: model.name,
        description: model.description,
        price: money::to_dollars(model.price),
        category_id: model.category_id,
        category_name,
        pic: model.pic,
        made_by: model.made_by,
        rating: model.rating,
        popularity: model.popularity,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
