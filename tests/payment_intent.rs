use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use axum_restaurant_api::{
    config::StripeConfig,
    dto::payments::CreatePaymentIntentRequest,
    error::AppError,
    services::payment_service::{self, StripeClient},
};
use serde_json::json;

type Captured = Arc<Mutex<Option<String>>>;

async fn spawn_mock(app: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

fn client_for(api_base: String) -> anyhow::Result<StripeClient> {
    StripeClient::new(StripeConfig {
        secret_key: "sk_test_mock".into(),
        api_base,
    })
}

async fn record_intent(State(captured): State<Captured>, body: String) -> Json<serde_json::Value> {
    *captured.lock().unwrap() = Some(body);
    Json(json!({ "id": "pi_mock_1", "client_secret": "pi_mock_1_secret" }))
}

#[tokio::test]
async fn forwards_the_amount_in_cents() -> anyhow::Result<()> {
    let captured: Captured = Arc::new(Mutex::new(None));
    let app = Router::new()
        .route("/v1/payment_intents", post(record_intent))
        .with_state(captured.clone());
    let base = spawn_mock(app).await?;
    let stripe = client_for(base)?;

    let resp = payment_service::create_payment_intent(
        &stripe,
        CreatePaymentIntentRequest {
            amount: Some(42.5),
            customer_uuid: Some("abc-123".into()),
        },
    )
    .await?;

    assert_eq!(resp.payment_intent_id, "pi_mock_1");
    assert_eq!(resp.client_secret, "pi_mock_1_secret");

    let body = captured.lock().unwrap().take().expect("captured form body");
    assert!(body.contains("amount=4250"), "{body}");
    assert!(body.contains("currency=usd"), "{body}");
    assert!(
        body.contains("automatic_payment_methods%5Benabled%5D=true"),
        "{body}"
    );
    assert!(body.contains("metadata%5Bcustomer_uuid%5D=abc-123"), "{body}");
    Ok(())
}

async fn decline_intent() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::PAYMENT_REQUIRED,
        Json(json!({ "error": { "message": "Your card was declined." } })),
    )
}

#[tokio::test]
async fn surfaces_provider_rejections_as_bad_gateway() -> anyhow::Result<()> {
    let app = Router::new().route("/v1/payment_intents", post(decline_intent));
    let base = spawn_mock(app).await?;
    let stripe = client_for(base)?;

    let err = payment_service::create_payment_intent(
        &stripe,
        CreatePaymentIntentRequest {
            amount: Some(10.0),
            customer_uuid: None,
        },
    )
    .await
    .unwrap_err();

    match &err {
        AppError::PaymentProviderError(message) => {
            assert_eq!(message, "Your card was declined.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let response = axum::response::IntoResponse::into_response(err);
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    Ok(())
}

#[tokio::test]
async fn rejects_missing_amount_without_calling_the_provider() -> anyhow::Result<()> {
    // Nothing listens on this port; validation must fail first.
    let stripe = client_for("http://127.0.0.1:9".into())?;

    let err = payment_service::create_payment_intent(
        &stripe,
        CreatePaymentIntentRequest {
            amount: None,
            customer_uuid: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
    Ok(())
}
