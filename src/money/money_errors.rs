use thiserror::Error;

pub type Result<T> = std::result::Result<T, MoneyError>;

/// Custom error type for monetary value operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid currency code: '{0}'")]
    InvalidCurrency(String),
    #[error("Currency mismatch: {0}")]
    CurrencyMismatch(String),
    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),
    #[error("Division by zero")]
    DivisionByZero,
}
