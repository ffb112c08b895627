//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod bank;
mod repository;

pub use bank::BankGateway;
pub use repository::PaymentRepository;
