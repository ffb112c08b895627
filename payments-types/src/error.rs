//! Error types for the payment gateway.

/// A payment request broke one of the field rules.
///
/// The `Display` text of each variant is the exact message returned to the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("card number should have 16 digits")]
    CardNumber,

    #[error("expiry year should have 4 digits")]
    ExpiryYear,

    #[error("expiry month should have value of 1 to 12")]
    ExpiryMonth,

    #[error("cvv should have 3 digits")]
    Cvv,

    #[error("amount must have up to two decimal places")]
    AmountPrecision,

    #[error("amount must be a positive number with up to two decimal places")]
    AmountFormat,

    #[error("amount must be greater than zero")]
    AmountNotPositive,

    #[error("invalid currency code")]
    Currency,
}

/// Failures talking to the bank collaborator.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("Bank unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid bank response: {0}")]
    InvalidResponse(String),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes. The `Display` text is what the caller
/// sees, so collaborator and storage details stay in the `source` chain.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to unmarshal the request")]
    Malformed,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("unexpected error with bank")]
    Bank(#[from] BankError),

    #[error("payment ID should have up to 36 characters")]
    BadIdentifier,

    #[error("payment not found")]
    NotFound,

    #[error("internal server error")]
    Internal(#[from] RepoError),
}
