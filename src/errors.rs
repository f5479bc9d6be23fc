use thiserror::Error;

use crate::cashflow::CashflowError;
use crate::holdings::HoldingError;
use crate::money::MoneyError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio accounting core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Monetary value error: {0}")]
    Money(#[from] MoneyError),

    #[error("Cashflow effect error: {0}")]
    Cashflow(#[from] CashflowError),

    #[error("Holding operation failed: {0}")]
    Holding(#[from] HoldingError),
}
