//! # Payments Types
//!
//! Domain types, validation rules and port traits for the payment gateway.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Amount, Currency, MaskedPayment, BankResult)
//! - `validation/` - Ordered field rules for payment requests
//! - `masking/` - Display-safe card numbers
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;
pub mod masking;
pub mod validation;

// Re-export commonly used types
pub use domain::{Amount, BankResult, Currency, MaskedPayment, PaymentId, PaymentStatus};
pub use dto::*;
pub use error::{AppError, BankError, RepoError, ValidationError};
pub use ports::{BankGateway, PaymentRepository};
pub use masking::mask_card_number;
pub use validation::validate;
