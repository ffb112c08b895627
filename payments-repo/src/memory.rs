//! In-memory repository adapter.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use payments_types::{MaskedPayment, PaymentId, PaymentRepository, RepoError};

// ─────────────────────────────────────────────────────────────────────────────
// In-Memory Payment Store
// ─────────────────────────────────────────────────────────────────────────────

/// Process-lifetime payment store guarded by a single mutex.
///
/// The lock is held for one map operation only and released when the guard
/// drops, on every path. Concurrent writes to the same id resolve to whichever
/// acquires the lock last.
#[derive(Debug, Default)]
pub struct InMemoryPaymentStore {
    payments: Mutex<HashMap<PaymentId, MaskedPayment>>,
}

impl InMemoryPaymentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn payments(&self) -> Result<MutexGuard<'_, HashMap<PaymentId, MaskedPayment>>, RepoError> {
        self.payments
            .lock()
            .map_err(|e| RepoError::Storage(format!("payment store lock poisoned: {e}")))
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentStore {
    async fn add_payment(&self, payment: MaskedPayment) -> Result<(), RepoError> {
        let id = payment.id.clone();
        let replaced = self.payments()?.insert(id.clone(), payment);

        if replaced.is_some() {
            tracing::warn!(payment_id = %id, "Overwrote existing payment with the same id");
        }
        Ok(())
    }

    async fn get_payment(&self, id: &PaymentId) -> Result<Option<MaskedPayment>, RepoError> {
        Ok(self.payments()?.get(id).cloned())
    }
}
