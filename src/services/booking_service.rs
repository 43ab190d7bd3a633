use chrono::{NaiveTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    audit::log_audit,
    dto::{
        bookings::{BookingList, BookingWithContext, BookingWithContextList, CreateBookingRequest,
            UpdateBookingStatusRequest},
        customers::ContactFields,
    },
    entity::{
        customers,
        dining_tables::{self, Entity as DiningTables},
        reservations::{ActiveModel as ReservationActive, Column, Entity as Reservations,
            Model as ReservationModel},
    },
    error::{AppError, AppResult},
    models::Reservation,
    response::{ApiResponse, Meta},
    services::customer_service,
    state::AppState,
};

pub const BOOKING_STATUSES: &[&str] = &["pending", "confirmed", "cancelled"];

/// Legal status transitions for a reservation. Cancellation is terminal.
pub fn transition_allowed(from: &str, to: &str) -> bool {
    matches!(
        (from, to),
        ("pending", "confirmed") | ("pending", "cancelled") | ("confirmed", "cancelled")
    )
}

/// The customer's earliest upcoming confirmed reservation, with its table if
/// one is assigned. "Upcoming" starts at midnight UTC today.
pub async fn find_active_reservation<C: ConnectionTrait>(
    conn: &C,
    customer_id: i64,
) -> AppResult<Option<(ReservationModel, Option<dining_tables::Model>)>> {
    let start_of_today = Utc::now()
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc();

    let found = Reservations::find()
        .find_also_related(DiningTables)
        .filter(Column::CustomerId.eq(customer_id))
        .filter(Column::Status.eq("confirmed"))
        .filter(Column::ReservationTime.gte(start_of_today))
        .order_by_asc(Column::ReservationTime)
        .one(conn)
        .await?;

    Ok(found)
}

pub async fn create_booking(
    state: &AppState,
    payload: CreateBookingRequest,
) -> AppResult<ApiResponse<Reservation>> {
    if payload.number_of_people < 1 {
        return Err(AppError::InvalidInput(
            "number_of_people must be at least 1".into(),
        ));
    }
    if payload.reservation_time < Utc::now() {
        return Err(AppError::InvalidInput(
            "reservation_time must be in the future".into(),
        ));
    }

    if let Some(table_id) = payload.table_id {
        let table = DiningTables::find_by_id(table_id).one(&state.orm).await?;
        if table.is_none() {
            return Err(AppError::InvalidInput(format!("unknown table {table_id}")));
        }
    }

    let contact = ContactFields {
        name: payload.name.clone(),
        email: payload.email.clone(),
        phone: payload.phone.clone(),
        address: None,
    };
    let customer =
        customer_service::resolve_customer(&state.orm, &payload.customer_uuid, Some(&contact))
            .await?;

    let reservation = ReservationActive {
        id: NotSet,
        customer_id: Set(customer.id),
        table_id: Set(payload.table_id),
        reservation_time: Set(payload.reservation_time.into()),
        number_of_people: Set(payload.number_of_people),
        status: Set("pending".into()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(&customer.uuid),
        "booking_create",
        Some("reservations"),
        Some(serde_json::json!({ "reservation_id": reservation.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Booking created",
        reservation_from_entity(reservation),
        Some(Meta::empty()),
    ))
}

/// Reservations for one customer uuid, newest first. An unknown uuid yields
/// an empty list rather than a 404; the storefront polls this before the
/// customer record necessarily exists.
pub async fn list_customer_bookings(
    state: &AppState,
    uuid: &str,
) -> AppResult<ApiResponse<BookingList>> {
    let customer = customers::Entity::find()
        .filter(customers::Column::Uuid.eq(uuid))
        .one(&state.orm)
        .await?;

    let items = match customer {
        Some(customer) => Reservations::find()
            .filter(Column::CustomerId.eq(customer.id))
            .order_by_desc(Column::ReservationTime)
            .all(&state.orm)
            .await?
            .into_iter()
            .map(reservation_from_entity)
            .collect(),
        None => Vec::new(),
    };

    Ok(ApiResponse::success(
        "Bookings",
        BookingList { items },
        Some(Meta::empty()),
    ))
}

/// Admin listing with customer and table context.
pub async fn list_bookings(state: &AppState) -> AppResult<ApiResponse<BookingWithContextList>> {
    let rows = Reservations::find()
        .find_also_related(customers::Entity)
        .order_by_desc(Column::ReservationTime)
        .all(&state.orm)
        .await?;

    let tables = DiningTables::find().all(&state.orm).await?;

    let items = rows
        .into_iter()
        .filter_map(|(reservation, customer)| {
            let customer = customer?;
            let table_number = reservation
                .table_id
                .and_then(|id| tables.iter().find(|t| t.id == id))
                .map(|t| t.table_number);
            Some(BookingWithContext {
                customer_name: customer.name,
                customer_uuid: customer.uuid,
                table_number,
                reservation: reservation_from_entity(reservation),
            })
        })
        .collect();

    Ok(ApiResponse::success(
        "Bookings",
        BookingWithContextList { items },
        Some(Meta::empty()),
    ))
}

pub async fn update_booking_status(
    state: &AppState,
    id: i64,
    payload: UpdateBookingStatusRequest,
) -> AppResult<ApiResponse<Reservation>> {
    let status = payload.status.trim().to_lowercase();
    if !BOOKING_STATUSES.contains(&status.as_str()) {
        return Err(AppError::InvalidInput(format!("unknown status '{status}'")));
    }

    let reservation = Reservations::find_by_id(id).one(&state.orm).await?;
    let reservation = match reservation {
        Some(r) => r,
        None => return Err(AppError::NotFound),
    };

    if !transition_allowed(&reservation.status, &status) {
        return Err(AppError::InvalidInput(format!(
            "cannot move a {} booking to {status}",
            reservation.status
        )));
    }

    let mut active: ReservationActive = reservation.into();
    active.status = Set(status.clone());
    let updated = active.update(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.pool,
        None,
        "booking_status",
        Some("reservations"),
        Some(serde_json::json!({ "reservation_id": updated.id, "status": status })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Booking updated",
        reservation_from_entity(updated),
        Some(Meta::empty()),
    ))
}

pub fn reservation_from_entity(model: ReservationModel) -> Reservation {
    Reservation {
        id: model.id,
        customer_id: model.customer_id,
        table_id: model.table_id,
        reservation_time: model.reservation_time.with_timezone(&Utc),
        number_of_people: model.number_of_people,
        status: model.status,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
