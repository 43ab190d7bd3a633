use axum_restaurant_api::services::booking_service::{BOOKING_STATUSES, transition_allowed};

#[test]
fn pending_bookings_can_be_confirmed_or_cancelled() {
    assert!(transition_allowed("pending", "confirmed"));
    assert!(transition_allowed("pending", "cancelled"));
}

#[test]
fn confirmed_bookings_can_only_be_cancelled() {
    assert!(transition_allowed("confirmed", "cancelled"));
    assert!(!transition_allowed("confirmed", "pending"));
    assert!(!transition_allowed("confirmed", "confirmed"));
}

#[test]
fn cancellation_is_terminal() {
    for to in BOOKING_STATUSES {
        assert!(!transition_allowed("cancelled", to));
    }
}
