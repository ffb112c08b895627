//! # Payments Repository
//!
//! Concrete repository implementations (adapters) for the payment gateway.
//! This crate provides storage adapters that implement the `PaymentRepository` port.
//!
//! Payments live in process memory only and are gone when the process exits.

pub mod memory;

#[cfg(test)]
mod memory_tests;

pub use memory::InMemoryPaymentStore;

/// Builds the repository the server runs with.
pub fn build_repo() -> InMemoryPaymentStore {
    tracing::info!("Using in-memory payment store");
    InMemoryPaymentStore::new()
}
