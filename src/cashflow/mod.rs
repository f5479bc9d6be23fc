pub mod account_effect;
pub mod cashflow_errors;
pub mod cashflow_model;

// Re-export the main public entry points and types
pub use account_effect::{AccountEffect, WITHHOLDING_TAX_RATE_KEY};
pub use cashflow_errors::CashflowError;
pub use cashflow_model::{CashflowType, SignPolicy};
