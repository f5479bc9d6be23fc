pub mod cashflow;
pub mod constants;
pub mod errors;
pub mod holdings;
pub mod money;

pub use cashflow::{AccountEffect, CashflowError, CashflowType, SignPolicy};
pub use errors::{Error, Result};
pub use holdings::{AssetHolding, DomainEvent, HoldingError, HoldingSnapshot};
pub use money::{CurrencyConversion, MonetaryAmount, Money, MoneyError, Percentage};
