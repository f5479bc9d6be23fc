use std::cmp::Ordering;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::conversion::CurrencyConversion;
use super::money_errors::{MoneyError, Result};
use crate::constants::{MONEY_ROUNDING, MONEY_SCALE};

/// A monetary amount in a single currency.
///
/// The amount is always stored at [`MONEY_SCALE`] fractional digits, rounded
/// half-to-even. Binary operations require both operands to share a currency;
/// scaling by a dimensionless factor does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    amount: Decimal,
    currency: String,
}

/// Validates an ISO 4217 alphabetic code and returns it uppercased.
pub(crate) fn validate_currency_code(code: &str) -> Result<String> {
    let trimmed = code.trim();
    if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(MoneyError::InvalidCurrency(code.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

fn normalize(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(MONEY_SCALE, MONEY_ROUNDING);
    rounded.rescale(MONEY_SCALE);
    rounded
}

impl Money {
    pub fn new(amount: Decimal, currency: &str) -> Result<Self> {
        let currency = validate_currency_code(currency)?;
        Ok(Money {
            amount: normalize(amount),
            currency,
        })
    }

    pub fn zero(currency: &str) -> Result<Self> {
        Money::new(Decimal::ZERO, currency)
    }

    /// Crate-internal constructor for amounts derived from an already
    /// validated currency code.
    pub(crate) fn from_validated(amount: Decimal, currency: String) -> Self {
        Money {
            amount: normalize(amount),
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn add(&self, other: &Money) -> Result<Money> {
        self.require_same_currency(other, "add")?;
        Ok(Money::from_validated(
            self.amount + other.amount,
            self.currency.clone(),
        ))
    }

    pub fn subtract(&self, other: &Money) -> Result<Money> {
        self.require_same_currency(other, "subtract")?;
        Ok(Money::from_validated(
            self.amount - other.amount,
            self.currency.clone(),
        ))
    }

    /// Scales by a dimensionless factor. The multiplication runs at full
    /// decimal precision and the result is re-normalized to the money scale.
    pub fn multiply(&self, factor: Decimal) -> Money {
        Money::from_validated(self.amount * factor, self.currency.clone())
    }

    pub fn divide(&self, divisor: Decimal) -> Result<Money> {
        let quotient = self
            .amount
            .checked_div(divisor)
            .ok_or(MoneyError::DivisionByZero)?;
        Ok(Money::from_validated(quotient, self.currency.clone()))
    }

    /// Converts into `target_currency` using the supplied conversion, which
    /// must run from this money's currency to exactly the target.
    pub fn convert_to(&self, target_currency: &str, conversion: &CurrencyConversion) -> Result<Money> {
        let target = validate_currency_code(target_currency)?;
        if conversion.to_currency() != target {
            return Err(MoneyError::CurrencyMismatch(format!(
                "conversion targets {} but {} was requested",
                conversion.to_currency(),
                target
            )));
        }
        conversion.convert(self)
    }

    pub fn negate(&self) -> Money {
        Money::from_validated(-self.amount, self.currency.clone())
    }

    pub fn abs(&self) -> Money {
        Money::from_validated(self.amount.abs(), self.currency.clone())
    }

    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn try_cmp(&self, other: &Money) -> Result<Ordering> {
        self.require_same_currency(other, "compare")?;
        Ok(self.amount.cmp(&other.amount))
    }

    pub fn is_greater_than(&self, other: &Money) -> Result<bool> {
        Ok(self.try_cmp(other)? == Ordering::Greater)
    }

    pub fn is_less_than(&self, other: &Money) -> Result<bool> {
        Ok(self.try_cmp(other)? == Ordering::Less)
    }

    pub fn min(&self, other: &Money) -> Result<Money> {
        self.require_same_currency(other, "min")?;
        Ok(Money::from_validated(
            self.amount.min(other.amount),
            self.currency.clone(),
        ))
    }

    pub fn max(&self, other: &Money) -> Result<Money> {
        self.require_same_currency(other, "max")?;
        Ok(Money::from_validated(
            self.amount.max(other.amount),
            self.currency.clone(),
        ))
    }

    fn require_same_currency(&self, other: &Money, operation: &str) -> Result<()> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch(format!(
                "cannot {} {} and {}",
                operation, self.currency, other.currency
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
