//! # Payments Client SDK
//!
//! A typed Rust client for the payment gateway API.

use payments_types::{MaskedPayment, PaymentRequest};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response; `message` is the server's plain-text body.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Payment gateway API client.
pub struct PaymentsClient {
    base_url: String,
    http: Client,
}

impl PaymentsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Submits a card payment and returns the stored, masked record.
    ///
    /// A payment the bank declined is still `Ok`, with status `FAILED`.
    pub async fn process_payment(
        &self,
        req: &PaymentRequest,
    ) -> Result<MaskedPayment, ClientError> {
        let resp = self
            .http
            .post(format!("{}/payments", self.base_url))
            .json(req)
            .send()
            .await?;
        handle_response(resp).await
    }

    /// Fetches a previously processed payment by its bank-assigned ID.
    pub async fn get_payment(&self, id: &str) -> Result<MaskedPayment, ClientError> {
        let resp = self
            .http
            .get(format!("{}/payments/{}", self.base_url, id))
            .send()
            .await?;
        handle_response(resp).await
    }
}

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    let body = resp.text().await?;
    decode_body(status.as_u16(), status.is_success(), &body)
}

fn decode_body<T: DeserializeOwned>(
    status: u16,
    success: bool,
    body: &str,
) -> Result<T, ClientError> {
    if success {
        Ok(serde_json::from_str(body)?)
    } else {
        Err(ClientError::Api {
            status,
            message: body.trim().to_string(),
        })
    }
}
