use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::payments::{CreatePaymentIntentRequest, PaymentIntentResponse},
    error::AppResult,
    services::payment_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/create-payment-intent", post(create_payment_intent))
}

#[utoipa::path(
    post,
    path = "/api/payments/create-payment-intent",
    request_body = CreatePaymentIntentRequest,
    responses(
        (status = 200, description = "Payment intent created", body = PaymentIntentResponse),
        (status = 400, description = "Missing, non-positive or absurd amount"),
        (status = 502, description = "Payment provider error"),
    ),
    tag = "Payments"
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(payload): Json<CreatePaymentIntentRequest>,
) -> AppResult<Json<PaymentIntentResponse>> {
    let resp = payment_service::create_payment_intent(&state.stripe, payload).await?;
    Ok(Json(resp))
}
