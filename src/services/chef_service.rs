use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::{
    audit::log_audit,
    dto::chefs::{ChefList, CreateChefRequest, UpdateChefRequest},
    entity::chefs::{ActiveModel as ChefActive, Column, Entity as Chefs, Model as ChefModel},
    error::{AppError, AppResult},
    models::Chef,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_chefs(state: &AppState) -> AppResult<ApiResponse<ChefList>> {
    let items = Chefs::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(chef_from_entity)
        .collect();

    Ok(ApiResponse::success(
        "Chefs",
        ChefList { items },
        Some(Meta::empty()),
    ))
}

pub async fn get_chef(state: &AppState, id: i64) -> AppResult<ApiResponse<Chef>> {
    let found = Chefs::find_by_id(id).one(&state.orm).await?;
    let chef = match found {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Chef", chef_from_entity(chef), None))
}

pub async fn create_chef(
    state: &AppState,
    payload: CreateChefRequest,
) -> AppResult<ApiResponse<Chef>> {
    if payload.fullname.trim().is_empty() {
        return Err(AppError::InvalidInput("fullname is required".into()));
    }

    let chef = ChefActive {
        id: NotSet,
        fullname: Set(payload.fullname),
        specialization: Set(payload.specialization),
        pic: Set(payload.pic),
        about: Set(payload.about),
    }
    .insert(&state.orm)
    .await?;

    if let Err(err) = log_audit(
        &state.pool,
        None,
        "chef_create",
        Some("chefs"),
        Some(serde_json::json!({ "chef_id": chef.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Chef added successfully",
        chef_from_entity(chef),
        Some(Meta::empty()),
    ))
}

pub async fn update_chef(
    state: &AppState,
    id: i64,
    payload: UpdateChefRequest,
) -> AppResult<ApiResponse<Chef>> {
    let existing = Chefs::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };

    let mut active: ChefActive = existing.into();
    if let Some(fullname) = payload.fullname {
        active.fullname = Set(fullname);
    }
    if let Some(specialization) = payload.specialization {
        active.specialization = Set(specialization);
    }
    if let Some(pic) = payload.pic {
        active.pic = Set(Some(pic));
    }
    if let Some(about) = payload.about {
        active.about = Set(Some(about));
    }

    let chef = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Chef updated successfully",
        chef_from_entity(chef),
        Some(Meta::empty()),
    ))
}

pub async fn delete_chef(state: &AppState, id: i64) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Chefs::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    Ok(ApiResponse::success(
        "Chef deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub fn chef_from_entity(model: ChefModel) -> Chef {
    Chef {
        id: model.id,
        fullname: model.fullname,
        specialization: model.specialization,
        pic: model.pic,
        about: model.about,
    }
}
