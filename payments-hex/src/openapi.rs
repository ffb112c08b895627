//! OpenAPI document for the payment gateway.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use payments_types::dto::PaymentRequest;
use payments_types::{MaskedPayment, PaymentStatus};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Process a card payment
///
/// Validates the card details, submits them to the bank and stores a masked
/// record of the outcome. Error bodies are plain text.
#[utoipa::path(
    post,
    path = "/payments",
    tag = "payments",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Payment processed (bank status may be SUCCESS or FAILED)", body = MaskedPayment),
        (status = 400, description = "Malformed body or a field failed validation", body = String, content_type = "text/plain",
            example = "card number should have 16 digits"),
        (status = 500, description = "The bank call failed", body = String, content_type = "text/plain",
            example = "unexpected error with bank")
    )
)]
async fn process_payment() {}

/// Get a processed payment by ID
#[utoipa::path(
    get,
    path = "/payments/{id}",
    tag = "payments",
    params(
        ("id" = String, Path, description = "Bank-assigned payment ID (at most 36 characters)")
    ),
    responses(
        (status = 200, description = "Payment found", body = MaskedPayment),
        (status = 400, description = "ID longer than 36 characters", body = String, content_type = "text/plain",
            example = "payment ID should have up to 36 characters"),
        (status = 404, description = "No payment with this ID", body = String, content_type = "text/plain",
            example = "payment not found")
    )
)]
async fn get_payment() {}

/// OpenAPI documentation for the Payments API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Gateway API",
        version = "1.0.0",
        description = "Mock payment gateway: processes card payments through a bank and serves masked payment records. Records are kept in memory only.",
        license(name = "MIT"),
    ),
    paths(health, process_payment, get_payment),
    components(schemas(PaymentRequest, MaskedPayment, PaymentStatus)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Process and retrieve payments"),
    )
)]
pub struct ApiDoc;
