use std::time::Duration;

use serde::Deserialize;

use crate::{
    config::StripeConfig,
    dto::payments::{CreatePaymentIntentRequest, PaymentIntentResponse},
    error::{AppError, AppResult},
    money,
};

/// Shared handle to the payment provider, built once at startup.
#[derive(Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    api_base: String,
    secret_key: String,
}

impl StripeClient {
    pub fn new(config: StripeConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            api_base: config.api_base,
            secret_key: config.secret_key,
        })
    }
}

#[derive(Debug, Deserialize)]
struct StripePaymentIntent {
    id: String,
    client_secret: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: Option<StripeError>,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: Option<String>,
}

/// Create a hosted-payment intent for a dollar amount. Amounts are converted
/// to cents (round to nearest) before the provider call. Provider failures
/// surface the provider's message and are never retried, so a payment is
/// never silently duplicated.
pub async fn create_payment_intent(
    stripe: &StripeClient,
    payload: CreatePaymentIntentRequest,
) -> AppResult<PaymentIntentResponse> {
    let amount = payload
        .amount
        .ok_or_else(|| AppError::InvalidInput("Amount is required".into()))?;
    let cents = money::validate_amount(amount)?;

    let customer_uuid = payload
        .customer_uuid
        .as_deref()
        .filter(|u| !u.is_empty())
        .unwrap_or("guest");

    let params = [
        ("amount", cents.to_string()),
        ("currency", "usd".to_string()),
        ("automatic_payment_methods[enabled]", "true".to_string()),
        ("metadata[customer_uuid]", customer_uuid.to_string()),
    ];

    let response = stripe
        .http
        .post(format!("{}/v1/payment_intents", stripe.api_base))
        .bearer_auth(&stripe.secret_key)
        .form(&params)
        .send()
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "payment intent request failed");
            AppError::PaymentProviderError(err.to_string())
        })?;

    if !response.status().is_success() {
        let status = response.status();
        let message = response
            .json::<StripeErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .and_then(|err| err.message)
            .unwrap_or_else(|| format!("provider returned {status}"));
        tracing::error!(%status, %message, "payment intent rejected");
        return Err(AppError::PaymentProviderError(message));
    }

    let intent: StripePaymentIntent = response
        .json()
        .await
        .map_err(|err| AppError::PaymentProviderError(err.to_string()))?;

    tracing::info!(intent_id = %intent.id, amount_cents = cents, "payment intent created");

    Ok(PaymentIntentResponse {
        client_secret: intent.client_secret,
        payment_intent_id: intent.id,
    })
}
