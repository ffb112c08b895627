//! Payment domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::PaymentRequest;
use crate::masking::mask_card_number;

/// Identifier of a processed payment, assigned by the bank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    /// Longest identifier the bank can hand out (a hyphenated UUID).
    pub const MAX_LEN: usize = 36;

    /// Wraps a bank-issued identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier fits within [`PaymentId::MAX_LEN`] characters.
    ///
    /// Counts Unicode scalar values, not bytes.
    pub fn is_within_max_len(id: &str) -> bool {
        id.chars().count() <= Self::MAX_LEN
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome reported by the bank for a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Success,
    Failed,
}

impl PaymentStatus {
    /// Returns the wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Success => "SUCCESS",
            PaymentStatus::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the bank returns for a submitted payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankResult {
    pub id: PaymentId,
    pub status: PaymentStatus,
}

/// A processed payment as stored and returned by the gateway.
///
/// Never carries the raw card number or the CVV. Records are immutable
/// once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MaskedPayment {
    /// Bank-assigned identifier
    #[schema(value_type = String, example = "3f2b5c1e-8a4d-4e0b-9c57-2d1f6a7b8c90")]
    pub id: PaymentId,
    /// Bank outcome
    pub status: PaymentStatus,
    /// Card number with all but the last four digits masked
    #[schema(example = "************1234")]
    pub masked_card_number: String,
    #[schema(example = 2099)]
    pub expiry_year: u32,
    #[schema(example = 12)]
    pub expiry_month: u32,
    #[schema(value_type = f64, example = 10.05)]
    pub amount: Decimal,
    #[schema(example = "GBP")]
    pub currency: String,
}

impl MaskedPayment {
    /// Builds the storable record from a validated request and the bank's answer.
    pub fn new(request: &PaymentRequest, bank: BankResult) -> Self {
        Self {
            id: bank.id,
            status: bank.status,
            masked_card_number: mask_card_number(&request.card_number),
            expiry_year: request.expiry_year,
            expiry_month: request.expiry_month,
            amount: request.amount.value(),
            currency: request.currency.clone(),
        }
    }
}
