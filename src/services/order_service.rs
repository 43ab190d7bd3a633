use std::collections::HashMap;

use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::{
        customers::ContactFields,
        orders::{OrderPlacedResponse, OrderSummary, OrderSummaryList, PlaceOrderRequest,
            ReservationSummary, UpdateOrderStatusRequest},
    },
    entity::{
        meals::{self, Entity as Meals},
        order_items::ActiveModel as OrderItemActive,
        orders::{ActiveModel as OrderActive, Entity as Orders, Model as OrderModel},
        payments::ActiveModel as PaymentActive,
    },
    error::{AppError, AppResult},
    models::Order,
    money,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::{booking_service, customer_service},
    state::AppState,
};

pub const ORDER_STATUSES: &[&str] = &[
    "pending",
    "confirmed",
    "preparing",
    "delivered",
    "completed",
    "cancelled",
];

/// Place an order: resolve the customer, attach an active reservation if one
/// exists, price the items from the catalog and persist order + items +
/// optional payment record in a single transaction. A failure at any step
/// rolls back everything, so partially-written orders are never visible.
pub async fn place_order(
    state: &AppState,
    payload: PlaceOrderRequest,
) -> AppResult<OrderPlacedResponse> {
    if payload.items.is_empty() {
        return Err(AppError::InvalidInput("Valid items array is required".into()));
    }
    if payload.items.iter().any(|item| item.quantity <= 0) {
        return Err(AppError::InvalidInput(
            "item quantities must be greater than 0".into(),
        ));
    }
    let customer_uuid = payload
        .customer_uuid
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AppError::InvalidInput("Customer UUID is required".into()))?;
    let total = payload
        .total
        .filter(|t| t.is_finite() && *t > 0.0)
        .ok_or_else(|| AppError::InvalidInput("Valid total amount is required".into()))?;
    let total_cents = money::to_minor_units(total);

    let contact = payload.customer_info.as_ref().map(|info| ContactFields {
        name: info.name.clone(),
        email: info.email.clone(),
        phone: info.phone.clone(),
        address: None,
    });

    // A dropped transaction rolls back, so early-error returns below leave
    // no rows behind, including the customer upsert.
    let txn = state.orm.begin().await?;

    let customer =
        customer_service::resolve_customer(&txn, customer_uuid, contact.as_ref()).await?;

    let reservation = booking_service::find_active_reservation(&txn, customer.id).await?;

    let delivery_address = payload
        .order_info
        .as_ref()
        .filter(|info| info.order_type.as_deref() != Some("table"))
        .and_then(|info| info.address.as_deref())
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string);

    if reservation.is_none() && delivery_address.is_none() {
        return Err(AppError::NoFulfillmentMethod);
    }

    // Price every line from the catalog; the client total must agree.
    let meal_ids: Vec<i64> = payload.items.iter().map(|item| item.id).collect();
    let catalog: HashMap<i64, i64> = Meals::find()
        .filter(meals::Column::Id.is_in(meal_ids))
        .all(&txn)
        .await?
        .into_iter()
        .map(|meal| (meal.id, meal.price))
        .collect();

    let mut computed_cents: i64 = 0;
    for item in &payload.items {
        let price = catalog.get(&item.id).copied().ok_or(AppError::NotFound)?;
        computed_cents += price * item.quantity as i64;
    }
    if computed_cents != total_cents {
        return Err(AppError::InvalidInput(format!(
            "total {} does not match catalog total {}",
            money::to_dollars(total_cents),
            money::to_dollars(computed_cents)
        )));
    }

    let order_uuid = Uuid::new_v4();
    let order = OrderActive {
        id: NotSet,
        customer_id: Set(customer.id),
        uuid: Set(order_uuid),
        order_date: Set(Utc::now().into()),
        status: Set(payload.status.clone().unwrap_or_else(|| "pending".into())),
        total_price: Set(computed_cents),
        delivery_address: Set(delivery_address),
        reservation_id: Set(reservation.as_ref().map(|(r, _)| r.id)),
    }
    .insert(&txn)
    .await?;

    for item in &payload.items {
        OrderItemActive {
            id: NotSet,
            order_id: Set(order.id),
            meal_id: Set(item.id),
            quantity: Set(item.quantity),
            price: Set(catalog[&item.id]),
        }
        .insert(&txn)
        .await?;
    }

    if let Some(info) = &payload.payment_info {
        PaymentActive {
            id: NotSet,
            order_id: Set(order.id),
            method: Set(info.method.clone()),
            amount: Set(money::validate_amount(info.amount)?),
            status: Set(info.status.clone()),
            paid_at: NotSet,
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(&customer.uuid),
        "order_create",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id, "order_uuid": order_uuid })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    let reservation = reservation.map(|(r, table)| ReservationSummary {
        id: r.id,
        table_number: table.map(|t| t.table_number),
        booking_date: r.reservation_time.with_timezone(&Utc),
        number_of_guests: r.number_of_people,
    });

    Ok(OrderPlacedResponse {
        message: "Order placed successfully".into(),
        order_uuid,
        customer_id: customer.id,
        order_id: order.id,
        reservation,
    })
}

#[derive(Debug, sqlx::FromRow)]
struct OrderSummaryRow {
    id: i64,
    customer_id: i64,
    uuid: Uuid,
    order_date: chrono::DateTime<Utc>,
    status: String,
    total_price: i64,
    delivery_address: Option<String>,
    reservation_id: Option<i64>,
    customer_name: Option<String>,
    meal_ids: Option<String>,
    meal_names: Option<String>,
    quantities: Option<String>,
}

/// Admin listing: every order, newest first, with the customer name and
/// aggregated item columns.
pub async fn list_orders(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<OrderSummaryList>> {
    let (page, limit, offset) = pagination.normalize();

    let rows = sqlx::query_as::<_, OrderSummaryRow>(
        r#"
        SELECT orders.id, orders.customer_id, orders.uuid, orders.order_date,
               orders.status, orders.total_price, orders.delivery_address,
               orders.reservation_id,
               customers.name AS customer_name,
               string_agg(order_items.meal_id::text, ',') AS meal_ids,
               string_agg(meals.name, ',') AS meal_names,
               string_agg(order_items.quantity::text, ',') AS quantities
        FROM orders
        LEFT JOIN customers ON orders.customer_id = customers.id
        LEFT JOIN order_items ON orders.id = order_items.order_id
        LEFT JOIN meals ON order_items.meal_id = meals.id
        GROUP BY orders.id, customers.name
        ORDER BY orders.order_date DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(&state.pool)
    .await?;

    let total: (i64,) = sqlx::query_as("SELECT count(*) FROM orders")
        .fetch_one(&state.pool)
        .await?;

    let items = rows
        .into_iter()
        .map(|row| OrderSummary {
            order: Order {
                id: row.id,
                customer_id: row.customer_id,
                uuid: row.uuid,
                order_date: row.order_date,
                status: row.status,
                total_price: money::to_dollars(row.total_price),
                delivery_address: row.delivery_address,
                reservation_id: row.reservation_id,
            },
            customer_name: row.customer_name,
            meal_ids: row.meal_ids,
            meal_names: row.meal_names,
            quantities: row.quantities,
        })
        .collect();

    let meta = Meta::new(page, limit, total.0);
    Ok(ApiResponse::success(
        "Orders",
        OrderSummaryList { items },
        Some(meta),
    ))
}

pub async fn update_order_status(
    state: &AppState,
    id: i64,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    let status = payload.status.trim().to_lowercase();
    if status.is_empty() {
        return Err(AppError::InvalidInput("Status is required".into()));
    }
    if !ORDER_STATUSES.contains(&status.as_str()) {
        return Err(AppError::InvalidInput(format!("unknown status '{status}'")));
    }

    let order = Orders::find_by_id(id).one(&state.orm).await?;
    let order = match order {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };

    let mut active: OrderActive = order.into();
    active.status = Set(status.clone());
    let updated = active.update(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.pool,
        None,
        "order_status",
        Some("orders"),
        Some(serde_json::json!({ "order_id": updated.id, "status": status })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Order updated successfully",
        order_from_entity(updated),
        Some(Meta::empty()),
    ))
}

/// Items and payment records go with the order via FK cascade.
pub async fn delete_order(state: &AppState, id: i64) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Orders::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    if let Err(err) = log_audit(
        &state.pool,
        None,
        "order_delete",
        Some("orders"),
        Some(serde_json::json!({ "order_id": id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ApiResponse::success(
        "Order deleted successfully",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        customer_id: model.customer_id,
        uuid: model.uuid,
        order_date: model.order_date.with_timezone(&Utc),
        status: model.status,
        total_price: money::to_dollars(model.total_price),
        delivery_address: model.delivery_address,
        reservation_id: model.reservation_id,
    }
}
