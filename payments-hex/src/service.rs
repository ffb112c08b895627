//! Payment Application Service
//!
//! Orchestrates validation, the bank call and storage through the ports.
//! Contains NO infrastructure logic - pure business orchestration.

use payments_types::{
    AppError, BankGateway, MaskedPayment, PaymentId, PaymentRepository, PaymentRequest, validate,
};

/// Application service for payment operations.
///
/// Generic over `R: PaymentRepository` and `B: BankGateway` - the adapters are
/// injected at compile time. This enables:
/// - Swapping the store or the bank without code changes
/// - Testing with in-memory doubles
/// - Compile-time checks for port implementation
pub struct PaymentService<R: PaymentRepository, B: BankGateway> {
    repo: R,
    bank: B,
}

impl<R: PaymentRepository, B: BankGateway> PaymentService<R, B> {
    /// Creates a new payment service with the given store and bank.
    pub fn new(repo: R, bank: B) -> Self {
        Self { repo, bank }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Returns a reference to the bank collaborator.
    pub fn bank(&self) -> &B {
        &self.bank
    }

    /// Processes a decoded payment request.
    ///
    /// The masked record is stored only after both validation and the bank
    /// call succeed; any failure leaves the store untouched.
    pub async fn process_payment(&self, req: PaymentRequest) -> Result<MaskedPayment, AppError> {
        if let Err(reason) = validate(&req) {
            tracing::info!(%reason, "Rejected payment request");
            return Err(reason.into());
        }

        let result = self.bank.submit(&req).await.map_err(|e| {
            tracing::error!(error = %e, "Bank call failed");
            AppError::from(e)
        })?;

        let payment = MaskedPayment::new(&req, result);
        self.repo.add_payment(payment.clone()).await?;

        tracing::info!(
            payment_id = %payment.id,
            status = %payment.status,
            card = %payment.masked_card_number,
            "Processed payment"
        );
        Ok(payment)
    }

    /// Gets a payment by its bank-assigned id.
    pub async fn get_payment(&self, id: &str) -> Result<MaskedPayment, AppError> {
        if !PaymentId::is_within_max_len(id) {
            return Err(AppError::BadIdentifier);
        }

        let payment = self
            .repo
            .get_payment(&PaymentId::new(id))
            .await?
            .ok_or(AppError::NotFound)?;

        tracing::debug!(payment_id = %payment.id, "Fetched payment");
        Ok(payment)
    }
}
