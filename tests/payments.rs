use axum_restaurant_api::error::AppError;
use axum_restaurant_api::money::{to_dollars, to_minor_units, validate_amount};

#[test]
fn converts_dollars_to_cents_rounding_to_nearest() {
    assert_eq!(to_minor_units(42.5), 4250);
    assert_eq!(to_minor_units(19.98), 1998);
    assert_eq!(to_minor_units(9.99), 999);
    // float artifacts like 0.1 + 0.2 must still land on the right cent
    assert_eq!(to_minor_units(0.1 + 0.2), 30);
}

#[test]
fn converts_cents_back_to_dollars() {
    assert_eq!(to_dollars(1998), 19.98);
    assert_eq!(to_dollars(4250), 42.5);
}

#[test]
fn accepts_reasonable_amounts() {
    assert_eq!(validate_amount(42.5).unwrap(), 4250);
    assert_eq!(validate_amount(0.01).unwrap(), 1);
}

#[test]
fn rejects_non_positive_amounts() {
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = validate_amount(bad).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)), "amount {bad}");
    }
}

#[test]
fn rejects_absurdly_large_amounts() {
    let err = validate_amount(1_000_000.0).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}
