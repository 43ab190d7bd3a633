use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::response::{ApiResponse, Meta};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No active reservation found; provide a delivery address or make a reservation")]
    NoFulfillmentMethod,

    #[error("Customer resolution failed")]
    CustomerResolutionFailed(#[source] sea_orm::DbErr),

    #[error("Payment provider error: {0}")]
    PaymentProviderError(String),

    #[error("Database error")]
    DbError(#[from] sqlx::Error),

    #[error("Database error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NoFulfillmentMethod => StatusCode::BAD_REQUEST,
            AppError::PaymentProviderError(_) => StatusCode::BAD_GATEWAY,
            AppError::CustomerResolutionFailed(_)
            | AppError::DbError(_)
            | AppError::OrmError(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        let details = match &self {
            // Diagnostics only; clients key off the status, never this text.
            AppError::CustomerResolutionFailed(source) => source.to_string(),
            AppError::DbError(source) => source.to_string(),
            AppError::OrmError(source) => source.to_string(),
            _ => message.clone(),
        };

        let body = ApiResponse {
            message,
            data: Some(ErrorData { error: details }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
