//! Domain models for the payment gateway.

pub mod amount;
pub mod currency;
pub mod payment;

pub use amount::Amount;
pub use currency::Currency;
pub use payment::{BankResult, MaskedPayment, PaymentId, PaymentStatus};
