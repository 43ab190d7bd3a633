use axum::Router;

use crate::state::AppState;

pub mod bookings;
pub mod categories;
pub mod chefs;
pub mod customers;
pub mod doc;
pub mod health;
pub mod meals;
pub mod orders;
pub mod params;
pub mod payments;

// Build the API router without binding state; it is provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/meals", meals::router())
        .nest("/categories", categories::router())
        .nest("/chefs", chefs::router())
        .nest("/customers", customers::router())
        .nest("/bookings", bookings::router())
        .nest("/orders", orders::router())
        .nest("/payments", payments::router())
}
