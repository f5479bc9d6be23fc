pub mod conversion;
pub mod monetary_amount;
pub mod money_errors;
pub mod money_model;
pub mod percentage;

// Re-export the main public entry points and types
pub use conversion::CurrencyConversion;
pub use monetary_amount::MonetaryAmount;
pub use money_errors::MoneyError;
pub use money_model::Money;
pub use percentage::Percentage;
