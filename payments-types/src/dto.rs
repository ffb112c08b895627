//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Amount;
use crate::masking::mask_card_number;

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to process a card payment.
///
/// Missing fields decode to their zero values so that the validator, not the
/// decoder, reports what is wrong with them.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PaymentRequest {
    /// Full card number, 16 digits
    #[schema(example = "1234123412341234")]
    pub card_number: String,
    /// Four-digit expiry year
    #[schema(example = 2099)]
    pub expiry_year: u32,
    /// Expiry month, 1 to 12
    #[schema(example = 12)]
    pub expiry_month: u32,
    /// Card verification value, 3 digits
    #[schema(example = "987")]
    pub cvv: String,
    /// Amount with at most two decimal places
    #[schema(value_type = f64, example = 10.05)]
    pub amount: Amount,
    /// ISO 4217 code (EUR or GBP)
    #[schema(example = "GBP")]
    pub currency: String,
}

// Card data must never reach the logs, even through `{:?}`.
impl std::fmt::Debug for PaymentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentRequest")
            .field("card_number", &mask_card_number(&self.card_number))
            .field("expiry_year", &self.expiry_year)
            .field("expiry_month", &self.expiry_month)
            .field("cvv", &"***")
            .field("amount", &self.amount)
            .field("currency", &self.currency)
            .finish()
    }
}
