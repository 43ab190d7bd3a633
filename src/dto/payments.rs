use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePaymentIntentRequest {
    /// Dollars.
    pub amount: Option<f64>,
    pub customer_uuid: Option<String>,
}

/// Flat body consumed by the Stripe Elements form on the storefront.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
    pub payment_intent_id: String,
}
