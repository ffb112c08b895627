//! Mock Acquiring Bank
//!
//! Stand-in for the bank that authorises card payments. Every submission is
//! answered with a fresh UUID v4 payment id (36 characters) and a random
//! status: `FAILED` with probability `failure_rate`, `SUCCESS` otherwise.
//! The default failure rate is 20%.
//!
//! The answer goes through the bank's JSON wire format and is decoded the way
//! a real HTTP client would decode it, so decoding failures surface as
//! [`BankError::InvalidResponse`].
//!
//! # Example
//! ```
//! use mock_bank::MockBank;
//!
//! let always_declines = MockBank::with_failure_rate(1.0).unwrap();
//! assert_eq!(always_declines.failure_rate(), 1.0);
//! ```

use async_trait::async_trait;
use payments_types::{
    BankError, BankGateway, BankResult, PaymentId, PaymentRequest, PaymentStatus,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error type for mock bank configuration.
#[derive(Debug, thiserror::Error)]
pub enum MockBankError {
    #[error("Failure rate must be between 0 and 1, got {0}")]
    InvalidFailureRate(f64),
}

/// Body the bank sends back for a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakePaymentResponse {
    pub payment_id: String,
    pub status: PaymentStatus,
}

/// Bank double with a configurable share of declined payments.
#[derive(Debug, Clone)]
pub struct MockBank {
    failure_rate: f64,
}

impl Default for MockBank {
    fn default() -> Self {
        Self {
            failure_rate: Self::DEFAULT_FAILURE_RATE,
        }
    }
}

impl MockBank {
    /// Share of payments declined unless configured otherwise.
    pub const DEFAULT_FAILURE_RATE: f64 = 0.2;

    /// Creates a bank that declines 20% of payments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bank that declines the given share of payments.
    pub fn with_failure_rate(failure_rate: f64) -> Result<Self, MockBankError> {
        if !(0.0..=1.0).contains(&failure_rate) {
            return Err(MockBankError::InvalidFailureRate(failure_rate));
        }
        Ok(Self { failure_rate })
    }

    /// Returns the share of payments this bank declines.
    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }

    fn generate_response(&self) -> MakePaymentResponse {
        let status = if rand::rng().random_bool(self.failure_rate) {
            PaymentStatus::Failed
        } else {
            PaymentStatus::Success
        };

        MakePaymentResponse {
            payment_id: Uuid::new_v4().to_string(),
            status,
        }
    }
}

/// Decodes a bank response body into a [`BankResult`].
pub fn decode_response(body: &[u8]) -> Result<BankResult, BankError> {
    let response: MakePaymentResponse = serde_json::from_slice(body).map_err(|e| {
        BankError::InvalidResponse(format!(
            "failed to decode payment response from bank server: {e}"
        ))
    })?;

    if response.payment_id.is_empty() {
        return Err(BankError::InvalidResponse("empty payment_id".into()));
    }

    Ok(BankResult {
        id: PaymentId::new(response.payment_id),
        status: response.status,
    })
}

#[async_trait]
impl BankGateway for MockBank {
    async fn submit(&self, details: &PaymentRequest) -> Result<BankResult, BankError> {
        let body = serde_json::to_vec(&self.generate_response())
            .map_err(|e| BankError::Unavailable(e.to_string()))?;
        let result = decode_response(&body)?;

        tracing::debug!(
            payment_id = %result.id,
            status = %result.status,
            currency = %details.currency,
            "Mock bank answered"
        );
        Ok(result)
    }
}
