//! Bank collaborator port.
//!
//! This trait defines the interface to the acquiring bank.
//! Implementations can be HTTP clients, mock providers, etc.

use crate::domain::BankResult;
use crate::dto::PaymentRequest;
use crate::error::BankError;

/// Port trait for the bank that authorises payments.
#[async_trait::async_trait]
pub trait BankGateway: Send + Sync + 'static {
    /// Submits validated payment details and returns the bank's identifier
    /// and outcome for them.
    async fn submit(&self, details: &PaymentRequest) -> Result<BankResult, BankError>;
}
