//! Repository port trait.
//!
//! This is the storage port in our hexagonal architecture.
//! Adapters (in-memory today) implement this trait.

use crate::domain::{MaskedPayment, PaymentId};
use crate::error::RepoError;

/// Keyed store of processed payments.
///
/// Records are only ever inserted and read: there is no update, delete or
/// listing operation.
#[async_trait::async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Stores a payment under its id, replacing any record with the same id.
    async fn add_payment(&self, payment: MaskedPayment) -> Result<(), RepoError>;

    /// Looks up a payment by id. Absence is `Ok(None)`, not an error.
    async fn get_payment(&self, id: &PaymentId) -> Result<Option<MaskedPayment>, RepoError>;
}
