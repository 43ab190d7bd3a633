use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set,
};

use crate::{
    dto::customers::ContactFields,
    entity::customers::{ActiveModel as CustomerActive, Column, Entity as Customers, Model as CustomerModel},
    error::{AppError, AppResult},
    models::Customer,
    response::ApiResponse,
    state::AppState,
};

/// Find the customer for an opaque client uuid, creating the row on first
/// sight. New rows take the supplied contact fields and otherwise stay NULL;
/// existing rows are updated in place when the caller supplies new values.
///
/// Generic over the connection so the order workflow can run it inside its
/// transaction; a concurrent create loses the race on the unique uuid column
/// and re-fetches the winner's row.
pub async fn resolve_customer<C: ConnectionTrait>(
    conn: &C,
    uuid: &str,
    contact: Option<&ContactFields>,
) -> AppResult<CustomerModel> {
    let uuid = uuid.trim();
    if uuid.is_empty() {
        return Err(AppError::InvalidInput("Customer UUID is required".into()));
    }

    let existing = Customers::find()
        .filter(Column::Uuid.eq(uuid))
        .one(conn)
        .await
        .map_err(AppError::CustomerResolutionFailed)?;

    if let Some(customer) = existing {
        return apply_contact_update(conn, customer, contact).await;
    }

    let active = CustomerActive {
        id: NotSet,
        uuid: Set(uuid.to_string()),
        name: Set(contact.and_then(|c| c.name.clone())),
        email: Set(contact.and_then(|c| c.email.clone())),
        phone: Set(contact.and_then(|c| c.phone.clone())),
        address: Set(contact.and_then(|c| c.address.clone())),
        created_at: NotSet,
    };

    // A concurrent create loses the race on the unique uuid column. A plain
    // insert would abort the caller's transaction on the duplicate key, so
    // insert with ON CONFLICT DO NOTHING and fetch whichever row won.
    let inserted = Customers::insert(active)
        .on_conflict(OnConflict::column(Column::Uuid).do_nothing().to_owned())
        .exec(conn)
        .await;
    match inserted {
        Ok(_) | Err(DbErr::RecordNotInserted) => {}
        Err(err) => return Err(AppError::CustomerResolutionFailed(err)),
    }

    Customers::find()
        .filter(Column::Uuid.eq(uuid))
        .one(conn)
        .await
        .map_err(AppError::CustomerResolutionFailed)?
        .ok_or_else(|| {
            AppError::CustomerResolutionFailed(DbErr::Custom(
                "customer row missing after upsert".into(),
            ))
        })
}

async fn apply_contact_update<C: ConnectionTrait>(
    conn: &C,
    customer: CustomerModel,
    contact: Option<&ContactFields>,
) -> AppResult<CustomerModel> {
    let Some(contact) = contact else {
        return Ok(customer);
    };

    let has_update = contact.name.is_some()
        || contact.email.is_some()
        || contact.phone.is_some()
        || contact.address.is_some();
    if !has_update {
        return Ok(customer);
    }

    let mut active: CustomerActive = customer.into();
    if let Some(name) = contact.name.clone() {
        active.name = Set(Some(name));
    }
    if let Some(email) = contact.email.clone() {
        active.email = Set(Some(email));
    }
    if let Some(phone) = contact.phone.clone() {
        active.phone = Set(Some(phone));
    }
    if let Some(address) = contact.address.clone() {
        active.address = Set(Some(address));
    }

    active
        .update(conn)
        .await
        .map_err(AppError::CustomerResolutionFailed)
}

pub async fn get_or_create_customer(
    state: &AppState,
    uuid: &str,
) -> AppResult<ApiResponse<Customer>> {
    let customer = resolve_customer(&state.orm, uuid, None).await?;
    Ok(ApiResponse::success(
        "Customer",
        customer_from_entity(customer),
        None,
    ))
}

pub fn customer_from_entity(model: CustomerModel) -> Customer {
    Customer {
        id: model.id,
        uuid: model.uuid,
        name: model.name,
        email: model.email,
        phone: model.phone,
        address: model.address,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
