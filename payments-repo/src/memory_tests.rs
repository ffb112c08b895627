//! In-memory repository tests.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use payments_types::{MaskedPayment, PaymentId, PaymentRepository, PaymentStatus};
    use rust_decimal::Decimal;

    use crate::InMemoryPaymentStore;

    fn payment(id: &str) -> MaskedPayment {
        MaskedPayment {
            id: PaymentId::new(id),
            status: PaymentStatus::Success,
            masked_card_number: "************1234".to_string(),
            expiry_year: 2099,
            expiry_month: 12,
            amount: Decimal::new(1005, 2),
            currency: "GBP".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_unknown_payment_is_none() {
        let store = InMemoryPaymentStore::new();

        let result = store.get_payment(&PaymentId::new("missing")).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_add_then_get_returns_same_payment() {
        let store = InMemoryPaymentStore::new();
        let stored = payment("abc");

        store.add_payment(stored.clone()).await.unwrap();
        let fetched = store.get_payment(&stored.id).await.unwrap();

        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn test_same_id_is_overwritten() {
        let store = InMemoryPaymentStore::new();
        let first = payment("dup");
        let second = MaskedPayment {
            status: PaymentStatus::Failed,
            amount: Decimal::new(1, 2),
            ..payment("dup")
        };

        store.add_payment(first).await.unwrap();
        store.add_payment(second.clone()).await.unwrap();

        let fetched = store.get_payment(&PaymentId::new("dup")).await.unwrap();
        assert_eq!(fetched, Some(second));
    }

    #[tokio::test]
    async fn test_lookup_is_exact() {
        let store = InMemoryPaymentStore::new();
        store.add_payment(payment("abc")).await.unwrap();

        assert!(store.get_payment(&PaymentId::new("ABC")).await.unwrap().is_none());
        assert!(store.get_payment(&PaymentId::new("ab")).await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_are_not_lost() {
        let store = Arc::new(InMemoryPaymentStore::new());

        let writers: Vec<_> = (0..256)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store.add_payment(payment(&format!("id-{i}"))).await.unwrap();
                })
            })
            .collect();
        for writer in writers {
            writer.await.unwrap();
        }

        let readers: Vec<_> = (0..256)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    let id = format!("id-{i}");
                    let fetched = store.get_payment(&PaymentId::new(id.as_str())).await.unwrap();
                    assert_eq!(fetched, Some(payment(&id)));
                })
            })
            .collect();
        for reader in readers {
            reader.await.unwrap();
        }
    }
}
