use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        bookings::{BookingList, BookingWithContext, BookingWithContextList},
        categories::CategoryList,
        chefs::ChefList,
        meals::MealList,
        orders::{OrderPlacedResponse, OrderSummary, OrderSummaryList, ReservationSummary},
        payments::PaymentIntentResponse,
    },
    models::{Category, Chef, Customer, DiningTable, Meal, Order, OrderItem, Payment, Reservation},
    response::{ApiResponse, Meta},
    routes::{bookings, categories, chefs, customers, health, meals, orders, params, payments},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        meals::list_meals,
        meals::get_meal,
        meals::create_meal,
        meals::update_meal,
        meals::delete_meal,
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        chefs::list_chefs,
        chefs::get_chef,
        chefs::create_chef,
        chefs::update_chef,
        chefs::delete_chef,
        customers::get_customer,
        bookings::create_booking,
        bookings::list_bookings,
        bookings::list_customer_bookings,
        bookings::update_booking_status,
        orders::place_order,
        orders::list_orders,
        orders::update_order_status,
        orders::delete_order,
        payments::create_payment_intent,
    ),
    components(
        schemas(
            Customer,
            DiningTable,
            Reservation,
            Order,
            OrderItem,
            Payment,
            Meal,
            Category,
            Chef,
            MealList,
            CategoryList,
            ChefList,
            BookingList,
            BookingWithContext,
            BookingWithContextList,
            OrderPlacedResponse,
            ReservationSummary,
            OrderSummary,
            OrderSummaryList,
            PaymentIntentResponse,
            params::Pagination,
            params::MealListQuery,
            Meta,
            ApiResponse<Meal>,
            ApiResponse<MealList>,
            ApiResponse<Category>,
            ApiResponse<Chef>,
            ApiResponse<Customer>,
            ApiResponse<Reservation>,
            ApiResponse<Order>,
            ApiResponse<OrderSummaryList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Meals", description = "Meal catalog endpoints"),
        (name = "Categories", description = "Category catalog endpoints"),
        (name = "Chefs", description = "Chef catalog endpoints"),
        (name = "Customers", description = "Customer directory endpoints"),
        (name = "Bookings", description = "Table reservation endpoints"),
        (name = "Orders", description = "Order placement and admin endpoints"),
        (name = "Payments", description = "Payment intent endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
