//! Integration tests for the payments HTTP API.
//!
//! These drive the full router (in-memory store, mock bank) through
//! `tower::ServiceExt::oneshot`, checking status codes and exact bodies.

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use mock_bank::MockBank;
use payments_hex::{PaymentService, inbound::HttpServer};
use payments_repo::InMemoryPaymentStore;
use payments_types::{BankError, BankGateway, BankResult, PaymentRequest};
use tower::ServiceExt;

/// Bank that is always unreachable.
struct UnreachableBank;

#[async_trait]
impl BankGateway for UnreachableBank {
    async fn submit(&self, _details: &PaymentRequest) -> Result<BankResult, BankError> {
        Err(BankError::Unavailable("connect timeout after 30s".into()))
    }
}

/// Helper to create a router backed by the in-memory store and mock bank.
fn create_app() -> Router {
    let service = PaymentService::new(InMemoryPaymentStore::new(), MockBank::new());
    HttpServer::new(service).router()
}

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "card_number": "1234123412341234",
        "expiry_year": 2099,
        "expiry_month": 12,
        "cvv": "987",
        "amount": 10.05,
        "currency": "GBP"
    })
}

/// Helper to POST a raw body to /payments.
fn process_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/payments")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn get_request(id: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/payments/{id}"))
        .body(Body::empty())
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

#[tokio::test]
async fn test_process_then_fetch_payment() {
    let app = create_app();

    let response = app
        .clone()
        .oneshot(process_request(valid_body().to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let processed = body_json(response).await;

    assert_eq!(processed["masked_card_number"], "************1234");
    assert_eq!(processed["amount"], 10.05);
    assert_eq!(processed["currency"], "GBP");
    assert_eq!(processed["expiry_year"], 2099);
    assert_eq!(processed["expiry_month"], 12);
    let status = processed["status"].as_str().unwrap();
    assert!(status == "SUCCESS" || status == "FAILED", "status = {status}");
    let id = processed["id"].as_str().unwrap();
    assert!(!id.is_empty());

    let response = app.oneshot(get_request(id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;

    assert_eq!(fetched, processed);
}

#[tokio::test]
async fn test_response_never_contains_card_number_or_cvv() {
    let app = create_app();

    let response = app
        .oneshot(process_request(valid_body().to_string()))
        .await
        .unwrap();
    let body = body_text(response).await;

    assert!(!body.contains("1234123412341234"));
    assert!(!body.contains("987"));
    assert!(!body.contains("cvv"));
}

#[tokio::test]
async fn test_empty_card_number_returns_400() {
    let app = create_app();
    let mut body = valid_body();
    body["card_number"] = "".into();

    let response = app
        .oneshot(process_request(body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "card number should have 16 digits");
}

#[tokio::test]
async fn test_validation_error_body_is_plain_text() {
    let app = create_app();
    let mut body = valid_body();
    body["cvv"] = "1".into();

    let response = app
        .oneshot(process_request(body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/plain"));
    assert_eq!(body_text(response).await, "cvv should have 3 digits");
}

/// Request body with the amount spliced in as raw JSON number text.
fn body_with_amount(amount: &str) -> String {
    valid_body().to_string().replace("10.05", amount)
}

#[tokio::test]
async fn test_amount_rules_over_http() {
    let cases = [
        ("0.009", "amount must have up to two decimal places"),
        ("1e-30", "amount must have up to two decimal places"),
        (
            "-0.01",
            "amount must be a positive number with up to two decimal places",
        ),
        (
            "-0",
            "amount must be a positive number with up to two decimal places",
        ),
        (
            "-0.0",
            "amount must be a positive number with up to two decimal places",
        ),
        ("0", "amount must be greater than zero"),
    ];

    for (amount, expected) in cases {
        let app = create_app();

        let response = app
            .oneshot(process_request(body_with_amount(amount)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "amount = {amount}");
        assert_eq!(body_text(response).await, expected, "amount = {amount}");
    }
}

#[tokio::test]
async fn test_amount_beyond_decimal_range_is_malformed() {
    let app = create_app();

    let response = app
        .oneshot(process_request(body_with_amount("1e29")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "failed to unmarshal the request");
}

#[tokio::test]
async fn test_small_amounts_with_two_places_are_accepted() {
    for amount in [serde_json::json!(0.01), serde_json::json!(0.1)] {
        let app = create_app();
        let mut body = valid_body();
        body["amount"] = amount.clone();

        let response = app
            .oneshot(process_request(body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["amount"], amount);
    }
}

#[tokio::test]
async fn test_unsupported_currency_returns_400() {
    let app = create_app();
    let mut body = valid_body();
    body["currency"] = "USD".into();

    let response = app
        .oneshot(process_request(body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "invalid currency code");
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let app = create_app();

    for body in ["{\"card_number\": ", "42", "not json", "{\"expiry_year\": -1}"] {
        let response = app.clone().oneshot(process_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body = {body}");
        assert_eq!(body_text(response).await, "failed to unmarshal the request");
    }
}

#[tokio::test]
async fn test_missing_fields_are_reported_by_validation() {
    let app = create_app();

    let response = app.oneshot(process_request("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "card number should have 16 digits");
}

#[tokio::test]
async fn test_content_type_header_is_not_required() {
    let app = create_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/payments")
        .body(Body::from(valid_body().to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_bank_failure_returns_500_without_details() {
    let service = PaymentService::new(InMemoryPaymentStore::new(), UnreachableBank);
    let app = HttpServer::new(service).router();

    let response = app
        .oneshot(process_request(valid_body().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "unexpected error with bank");
}

#[tokio::test]
async fn test_get_payment_id_too_long_returns_400() {
    let app = create_app();
    let id = format!("{}a", "3f2b5c1e-8a4d-4e0b-9c57-2d1f6a7b8c90");

    let response = app.oneshot(get_request(&id)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "payment ID should have up to 36 characters"
    );
}

#[tokio::test]
async fn test_get_unknown_payment_returns_404() {
    let app = create_app();

    let response = app
        .oneshot(get_request("3f2b5c1e-8a4d-4e0b-9c57-2d1f6a7b8c90"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "payment not found");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = create_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert!(doc["paths"].get("/payments").is_some());
}

#[tokio::test]
async fn test_concurrent_payments_are_all_retrievable() {
    let app = create_app();

    let submissions: Vec<_> = (0..32)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                let response = app
                    .oneshot(process_request(valid_body().to_string()))
                    .await
                    .unwrap();
                assert_eq!(response.status(), StatusCode::OK);
                body_json(response).await
            })
        })
        .collect();

    let mut processed = Vec::new();
    for submission in submissions {
        processed.push(submission.await.unwrap());
    }

    for payment in processed {
        let id = payment["id"].as_str().unwrap();
        let response = app.clone().oneshot(get_request(id)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, payment);
    }
}
