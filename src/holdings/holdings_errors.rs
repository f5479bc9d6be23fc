use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::MoneyError;

pub type Result<T> = std::result::Result<T, HoldingError>;

/// Custom error type for holding operations.
///
/// Zero and negative quantities are deliberately distinct kinds
/// (`InvalidQuantity` vs `InvalidArgument`) so callers can tell the two
/// failure modes apart.
#[derive(Debug, Error)]
pub enum HoldingError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch { expected: String, actual: String },

    #[error("Invalid holding operation: {0}")]
    InvalidOperation(String),

    #[error("Insufficient holding: requested={requested}, available={available}")]
    InsufficientHolding {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Invalid dividend amount: {0}")]
    InvalidDividendAmount(String),

    #[error(transparent)]
    Money(#[from] MoneyError),
}
