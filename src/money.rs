//! Monetary amounts are stored as integer minor units (cents). The HTTP
//! contract carries decimal dollars, converted at the boundary.

use crate::error::{AppError, AppResult};

/// Largest dollar amount the API will accept for a single charge or order.
pub const MAX_AMOUNT_DOLLARS: f64 = 999_999.0;

pub fn to_minor_units(dollars: f64) -> i64 {
    (dollars * 100.0).round() as i64
}

pub fn to_dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Validate a caller-supplied dollar amount and convert it to cents.
pub fn validate_amount(dollars: f64) -> AppResult<i64> {
    if !dollars.is_finite() || dollars <= 0.0 {
        return Err(AppError::InvalidInput(
            "amount must be a positive number".into(),
        ));
    }
    if dollars > MAX_AMOUNT_DOLLARS {
        return Err(AppError::InvalidInput(format!(
            "amount exceeds the maximum of {MAX_AMOUNT_DOLLARS}"
        )));
    }
    Ok(to_minor_units(dollars))
}
