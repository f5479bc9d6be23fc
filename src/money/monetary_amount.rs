use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::conversion::CurrencyConversion;
use super::money_errors::{MoneyError, Result};
use super::money_model::Money;

/// A native-currency amount paired with the conversion context that expresses
/// it in the portfolio currency.
///
/// Invariant: the conversion runs from the native amount's currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonetaryAmount {
    native: Money,
    conversion: CurrencyConversion,
}

impl MonetaryAmount {
    pub fn new(native: Money, conversion: CurrencyConversion) -> Result<Self> {
        if conversion.from_currency() != native.currency() {
            return Err(MoneyError::CurrencyMismatch(format!(
                "conversion starts at {} but the native amount is in {}",
                conversion.from_currency(),
                native.currency()
            )));
        }
        Ok(MonetaryAmount { native, conversion })
    }

    /// A zero amount whose conversion is the identity on `currency`.
    pub fn zero(currency: &str) -> Result<Self> {
        MonetaryAmount::new(
            Money::zero(currency)?,
            CurrencyConversion::identity(currency)?,
        )
    }

    pub fn native(&self) -> &Money {
        &self.native
    }

    pub fn conversion(&self) -> &CurrencyConversion {
        &self.conversion
    }

    /// The native amount expressed in the conversion's target currency.
    pub fn portfolio_amount(&self) -> Result<Money> {
        self.conversion.convert(&self.native)
    }

    pub fn add(&self, other: &MonetaryAmount) -> Result<MonetaryAmount> {
        self.require_compatible(other, "add")?;
        Ok(MonetaryAmount {
            native: self.native.add(&other.native)?,
            conversion: self.conversion.clone(),
        })
    }

    pub fn subtract(&self, other: &MonetaryAmount) -> Result<MonetaryAmount> {
        self.require_compatible(other, "subtract")?;
        Ok(MonetaryAmount {
            native: self.native.subtract(&other.native)?,
            conversion: self.conversion.clone(),
        })
    }

    pub fn multiply(&self, factor: Decimal) -> MonetaryAmount {
        MonetaryAmount {
            native: self.native.multiply(factor),
            conversion: self.conversion.clone(),
        }
    }

    pub fn abs(&self) -> MonetaryAmount {
        MonetaryAmount {
            native: self.native.abs(),
            conversion: self.conversion.clone(),
        }
    }

    pub fn negate(&self) -> MonetaryAmount {
        MonetaryAmount {
            native: self.native.negate(),
            conversion: self.conversion.clone(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.native.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.native.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        self.native.is_negative()
    }

    /// True when the native currency differs from the conversion target.
    pub fn is_multi_currency(&self) -> bool {
        self.native.currency() != self.conversion.to_currency()
    }

    fn require_compatible(&self, other: &MonetaryAmount, operation: &str) -> Result<()> {
        if self.native.currency() != other.native.currency() {
            return Err(MoneyError::CurrencyMismatch(format!(
                "cannot {} amounts with different native currencies: {} vs {}",
                operation,
                self.native.currency(),
                other.native.currency()
            )));
        }
        if self.conversion.to_currency() != other.conversion.to_currency() {
            return Err(MoneyError::CurrencyMismatch(format!(
                "cannot {} amounts with different conversion targets: {} vs {}",
                operation,
                self.conversion.to_currency(),
                other.conversion.to_currency()
            )));
        }
        Ok(())
    }
}
