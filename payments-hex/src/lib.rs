//! # Payments Hex
//!
//! Application service layer and HTTP adapter for the payment gateway.
//!
//! ## Architecture
//!
//! - `service/` - Application service (validate, call the bank, mask, store)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document served next to the API
//!
//! The service is generic over `R: PaymentRepository` and `B: BankGateway`,
//! allowing different store and bank implementations to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::PaymentService;
