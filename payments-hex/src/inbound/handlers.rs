//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use payments_types::{AppError, BankGateway, PaymentRepository, PaymentRequest};

use crate::PaymentService;

/// Application state shared across handlers.
pub struct AppState<R: PaymentRepository, B: BankGateway> {
    pub service: PaymentService<R, B>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
///
/// Errors are sent as `text/plain` with the error's display text as the body.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    /// HTTP status the error maps to.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AppError::Malformed | AppError::Validation(_) | AppError::BadIdentifier => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Bank(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let AppError::Internal(e) = &self.0 {
            tracing::error!(error = %e, "Request failed");
        }
        (self.status(), self.0.to_string()).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Decodes a payment request body.
///
/// The `Content-Type` header is not consulted.
fn decode_payment_request(body: &[u8]) -> Result<PaymentRequest, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Could not decode payment request");
        AppError::Malformed
    })
}

/// Process a card payment.
// The body holds the raw card number and CVV, so nothing from it is recorded.
#[tracing::instrument(skip_all)]
pub async fn process_payment<R: PaymentRepository, B: BankGateway>(
    State(state): State<Arc<AppState<R, B>>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req = decode_payment_request(&body)?;
    let payment = state.service.process_payment(req).await?;
    Ok(Json(payment))
}

/// Get a processed payment by ID.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn get_payment<R: PaymentRepository, B: BankGateway>(
    State(state): State<Arc<AppState<R, B>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state.service.get_payment(&id).await?;
    Ok(Json(payment))
}
