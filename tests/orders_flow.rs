use axum_restaurant_api::{
    config::StripeConfig,
    db::{create_orm_conn, create_pool, run_migrations},
    dto::{
        bookings::{CreateBookingRequest, UpdateBookingStatusRequest},
        orders::{OrderItemRequest, OrderInfo, PaymentInfo, PlaceOrderRequest,
            UpdateOrderStatusRequest},
    },
    entity::{categories::ActiveModel as CategoryActive, meals::ActiveModel as MealActive},
    error::AppError,
    services::{
        booking_service, customer_service, meal_service, order_service,
        payment_service::StripeClient,
    },
    state::AppState,
};
use chrono::{Duration, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, Set};

// Full storefront flow: customer resolution, order placement with and without
// a fulfillment method, catalog price enforcement, bookings, status updates
// and deletion. One sequential test; steps share database state.
#[tokio::test]
async fn order_placement_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = setup_state(&database_url).await?;

    // Seed a category and two meals (prices in cents).
    let category = CategoryActive {
        id: NotSet,
        name: Set("Mains".into()),
        description: Set(None),
    }
    .insert(&state.orm)
    .await?;

    let ziti = seed_meal(&state, "Green Ziti", 999, category.id).await?;
    let lemonade = seed_meal(&state, "House Lemonade", 450, category.id).await?;

    // Catalog listing joins the category name and honors the filter.
    let mains = meal_service::list_meals(&state, Some("Mains".into()))
        .await?
        .data
        .unwrap();
    assert_eq!(mains.items.len(), 2);
    assert_eq!(mains.items[0].category_name.as_deref(), Some("Mains"));
    let empty = meal_service::list_meals(&state, Some("Desserts".into()))
        .await?
        .data
        .unwrap();
    assert!(empty.items.is_empty());
    let err = meal_service::get_meal(&state, 424_242).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    // First sight of a customer uuid creates exactly one row; a second
    // resolution reuses it.
    let customer = customer_service::resolve_customer(&state.orm, "abc-123", None).await?;
    assert_eq!(customer.uuid, "abc-123");
    assert_eq!(customer.name, None);
    let again = customer_service::resolve_customer(&state.orm, "abc-123", None).await?;
    assert_eq!(again.id, customer.id);
    assert_eq!(count(&state, "SELECT count(*) FROM customers").await?, 1);

    // Happy path: delivery order for 2x Green Ziti.
    let placed = order_service::place_order(&state, delivery_order("abc-123", ziti, 2, 19.98))
        .await?;
    assert_eq!(placed.customer_id, customer.id);
    assert!(placed.reservation.is_none());
    let stored_total: (i64,) =
        sqlx::query_as("SELECT total_price FROM orders WHERE id = $1")
            .bind(placed.order_id)
            .fetch_one(&state.pool)
            .await?;
    assert_eq!(stored_total.0, 1998);
    assert_eq!(
        count(&state, "SELECT count(*) FROM order_items").await?,
        1
    );

    // No dedup: the identical request yields a second, distinct order.
    let placed_again =
        order_service::place_order(&state, delivery_order("abc-123", ziti, 2, 19.98)).await?;
    assert_ne!(placed_again.order_uuid, placed.order_uuid);
    assert_eq!(count(&state, "SELECT count(*) FROM orders").await?, 2);

    // Empty items is rejected before anything is written.
    let err = order_service::place_order(
        &state,
        PlaceOrderRequest {
            items: vec![],
            customer_uuid: Some("abc-123".into()),
            total: Some(19.98),
            status: None,
            customer_info: None,
            order_info: None,
            payment_info: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(count(&state, "SELECT count(*) FROM orders").await?, 2);

    // Simultaneous first orders for a brand-new uuid must both succeed and
    // share one customer row, whichever transaction wins the insert. The
    // loser's upsert must not poison its own transaction.
    let (left, right) = tokio::join!(
        order_service::place_order(&state, delivery_order("race-1", ziti, 2, 19.98)),
        order_service::place_order(&state, delivery_order("race-1", ziti, 2, 19.98)),
    );
    let (left, right) = (left?, right?);
    assert_eq!(left.customer_id, right.customer_id);
    let racers: (i64,) = sqlx::query_as("SELECT count(*) FROM customers WHERE uuid = $1")
        .bind("race-1")
        .fetch_one(&state.pool)
        .await?;
    assert_eq!(racers.0, 1);

    // No reservation and no address: rejected, and the rollback also undoes
    // the first-sight customer upsert.
    let mut no_fulfillment = delivery_order("fresh-1", ziti, 1, 9.99);
    no_fulfillment.order_info = None;
    let err = order_service::place_order(&state, no_fulfillment).await.unwrap_err();
    assert!(matches!(err, AppError::NoFulfillmentMethod));
    let fresh: (i64,) = sqlx::query_as("SELECT count(*) FROM customers WHERE uuid = $1")
        .bind("fresh-1")
        .fetch_one(&state.pool)
        .await?;
    assert_eq!(fresh.0, 0);

    // The client total must match the catalog recomputation.
    let err = order_service::place_order(&state, delivery_order("abc-123", ziti, 2, 10.00))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    // Unknown meal ids are a 404.
    let err = order_service::place_order(&state, delivery_order("abc-123", 9999, 1, 9.99))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));

    // A payment_info payload produces exactly one payment record.
    let mut with_payment = delivery_order("abc-123", lemonade, 1, 4.50);
    with_payment.payment_info = Some(PaymentInfo {
        method: "cash".into(),
        amount: 4.50,
        status: "paid".into(),
    });
    let paid = order_service::place_order(&state, with_payment).await?;
    let payments: (i64,) = sqlx::query_as("SELECT count(*) FROM payments WHERE order_id = $1")
        .bind(paid.order_id)
        .fetch_one(&state.pool)
        .await?;
    assert_eq!(payments.0, 1);

    // A bogus payment amount is rejected and the whole order rolls back.
    let orders_before = count(&state, "SELECT count(*) FROM orders").await?;
    let mut bad_payment = delivery_order("abc-123", lemonade, 1, 4.50);
    bad_payment.payment_info = Some(PaymentInfo {
        method: "cash".into(),
        amount: -4.50,
        status: "paid".into(),
    });
    let err = order_service::place_order(&state, bad_payment)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(
        count(&state, "SELECT count(*) FROM orders").await?,
        orders_before
    );

    // A pending booking is not an active reservation yet.
    let table_id: (i64,) = sqlx::query_as("SELECT id FROM dining_tables ORDER BY id LIMIT 1")
        .fetch_one(&state.pool)
        .await?;
    let booking = booking_service::create_booking(
        &state,
        CreateBookingRequest {
            customer_uuid: "abc-123".into(),
            name: Some("Sherlock".into()),
            email: None,
            phone: None,
            reservation_time: Utc::now() + Duration::days(1),
            number_of_people: 2,
            table_id: Some(table_id.0),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(booking.status, "pending");

    let mut table_order = delivery_order("abc-123", ziti, 1, 9.99);
    table_order.order_info = None;
    let err = order_service::place_order(&state, table_order).await.unwrap_err();
    assert!(matches!(err, AppError::NoFulfillmentMethod));

    // Confirm it; ordering without an address now attaches the reservation.
    let confirmed = booking_service::update_booking_status(
        &state,
        booking.id,
        UpdateBookingStatusRequest {
            status: "confirmed".into(),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(confirmed.status, "confirmed");

    let err = booking_service::update_booking_status(
        &state,
        booking.id,
        UpdateBookingStatusRequest {
            status: "pending".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let mut table_order = delivery_order("abc-123", ziti, 1, 9.99);
    table_order.order_info = None;
    let seated = order_service::place_order(&state, table_order).await?;
    let reservation = seated.reservation.expect("reservation summary");
    assert_eq!(reservation.id, booking.id);
    assert_eq!(reservation.number_of_guests, 2);
    assert!(reservation.table_number.is_some());

    // Status transitions and deletion on the admin surface.
    let updated = order_service::update_order_status(
        &state,
        seated.order_id,
        UpdateOrderStatusRequest {
            status: "confirmed".into(),
        },
    )
    .await?
    .data
    .unwrap();
    assert_eq!(updated.status, "confirmed");

    let err = order_service::update_order_status(
        &state,
        seated.order_id,
        UpdateOrderStatusRequest {
            status: "bogus".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    order_service::delete_order(&state, seated.order_id).await?;
    let err = order_service::delete_order(&state, seated.order_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
    let orphans: (i64,) = sqlx::query_as("SELECT count(*) FROM order_items WHERE order_id = $1")
        .bind(seated.order_id)
        .fetch_one(&state.pool)
        .await?;
    assert_eq!(orphans.0, 0);

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url).await?;
    run_migrations(&pool).await?;
    let orm = create_orm_conn(database_url).await?;
    // Nothing here talks to the payment provider.
    let stripe = StripeClient::new(StripeConfig {
        secret_key: "sk_test_unused".into(),
        api_base: "http://127.0.0.1:9".into(),
    })?;

    // Clean tables between runs; dining_tables stay seeded.
    sqlx::query(
        "TRUNCATE TABLE payments, order_items, orders, reservations, customers, meals, categories, chefs, audit_logs RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await?;

    Ok(AppState { pool, orm, stripe })
}

async fn count(state: &AppState, query: &str) -> anyhow::Result<i64> {
    let row: (i64,) = sqlx::query_as(query).fetch_one(&state.pool).await?;
    Ok(row.0)
}

async fn seed_meal(
    state: &AppState,
    name: &str,
    price_cents: i64,
    category_id: i64,
) -> anyhow::Result<i64> {
    let meal = MealActive {
        id: NotSet,
        name: Set(name.to_string()),
        description: Set(None),
        price: Set(price_cents),
        category_id: Set(category_id),
        pic: Set(None),
        made_by: Set(None),
        rating: Set(None),
        popularity: Set(None),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;
    Ok(meal.id)
}

fn delivery_order(uuid: &str, meal_id: i64, quantity: i32, total: f64) -> PlaceOrderRequest {
    PlaceOrderRequest {
        items: vec![OrderItemRequest {
            id: meal_id,
            quantity,
            price: None,
        }],
        customer_uuid: Some(uuid.to_string()),
        total: Some(total),
        status: None,
        customer_info: None,
        order_info: Some(OrderInfo {
            order_type: Some("delivery".into()),
            address: Some("221B Baker St".into()),
            notes: None,
            payment_method: Some("cash".into()),
            table_id: None,
            payment_intent_id: None,
        }),
        payment_info: None,
    }
}
