use thiserror::Error;

use crate::money::MoneyError;

pub type Result<T> = std::result::Result<T, CashflowError>;

/// Custom error type for cashflow effect validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CashflowError {
    #[error("Both gross and net amounts are zero")]
    ZeroAmount,
    #[error("Currency mismatch: {0}")]
    CurrencyMismatch(String),
    #[error("Sign violation: {0}")]
    SignViolation(String),
    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),
    #[error(transparent)]
    Money(#[from] MoneyError),
}
