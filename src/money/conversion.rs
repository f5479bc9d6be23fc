use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money_errors::{MoneyError, Result};
use super::money_model::{validate_currency_code, Money};
use crate::constants::{FOREX_ROUNDING, FOREX_SCALE};

/// A directed exchange rate between two currencies at a point in time.
///
/// The rate is stored at [`FOREX_SCALE`] fractional digits and must be
/// strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyConversion {
    from_currency: String,
    to_currency: String,
    rate: Decimal,
    as_of: DateTime<Utc>,
}

impl CurrencyConversion {
    pub fn new(
        from_currency: &str,
        to_currency: &str,
        rate: Decimal,
        as_of: DateTime<Utc>,
    ) -> Result<Self> {
        let from_currency = validate_currency_code(from_currency)?;
        let to_currency = validate_currency_code(to_currency)?;

        if rate <= Decimal::ZERO {
            return Err(MoneyError::InvalidRate(format!(
                "rate must be positive, got {}",
                rate
            )));
        }

        let mut rate = rate.round_dp_with_strategy(FOREX_SCALE, FOREX_ROUNDING);
        rate.rescale(FOREX_SCALE);
        if rate.is_zero() {
            // a positive sub-scale rate that rounded away entirely
            return Err(MoneyError::InvalidRate(format!(
                "rate is below the forex scale of {} digits",
                FOREX_SCALE
            )));
        }

        Ok(CurrencyConversion {
            from_currency,
            to_currency,
            rate,
            as_of,
        })
    }

    /// A same-currency conversion with rate 1.
    pub fn identity(currency: &str) -> Result<Self> {
        CurrencyConversion::new(currency, currency, Decimal::ONE, Utc::now())
    }

    pub fn from_currency(&self) -> &str {
        &self.from_currency
    }

    pub fn to_currency(&self) -> &str {
        &self.to_currency
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }

    pub fn is_identity(&self) -> bool {
        self.from_currency == self.to_currency && self.rate == Decimal::ONE
    }

    /// Converts a native-currency amount into the target currency.
    pub fn convert(&self, amount: &Money) -> Result<Money> {
        if amount.currency() != self.from_currency {
            return Err(MoneyError::CurrencyMismatch(format!(
                "conversion expects {} but amount is in {}",
                self.from_currency,
                amount.currency()
            )));
        }
        if self.is_identity() {
            return Ok(amount.clone());
        }
        Ok(Money::from_validated(
            amount.amount() * self.rate,
            self.to_currency.clone(),
        ))
    }

    /// Converts a target-currency amount back into the native currency.
    pub fn convert_back(&self, amount: &Money) -> Result<Money> {
        if amount.currency() != self.to_currency {
            return Err(MoneyError::CurrencyMismatch(format!(
                "conversion targets {} but amount is in {}",
                self.to_currency,
                amount.currency()
            )));
        }
        if self.is_identity() {
            return Ok(amount.clone());
        }
        let native = amount
            .amount()
            .checked_div(self.rate)
            .ok_or(MoneyError::DivisionByZero)?;
        Ok(Money::from_validated(native, self.from_currency.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn eur_to_cad(rate: Decimal) -> CurrencyConversion {
        CurrencyConversion::new("EUR", "CAD", rate, Utc::now()).unwrap()
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        assert!(matches!(
            CurrencyConversion::new("EUR", "CAD", dec!(0), Utc::now()),
            Err(MoneyError::InvalidRate(_))
        ));
        assert!(matches!(
            CurrencyConversion::new("EUR", "CAD", dec!(-1.45), Utc::now()),
            Err(MoneyError::InvalidRate(_))
        ));
    }

    #[test]
    fn test_rescales_rate_to_forex_scale() {
        let conversion = eur_to_cad(dec!(1.23456789));
        assert_eq!(conversion.rate(), dec!(1.234568));
    }

    #[test]
    fn test_identity_returns_money_unchanged() {
        let identity = CurrencyConversion::identity("USD").unwrap();
        assert!(identity.is_identity());
        let m = Money::new(dec!(42.42), "USD").unwrap();
        assert_eq!(identity.convert(&m).unwrap(), m);
        assert_eq!(identity.convert_back(&m).unwrap(), m);
    }

    #[test]
    fn test_convert_applies_rate() {
        let conversion = eur_to_cad(dec!(1.45));
        let m = Money::new(dec!(100), "EUR").unwrap();
        let converted = conversion.convert(&m).unwrap();
        assert_eq!(converted, Money::new(dec!(145), "CAD").unwrap());
    }

    #[test]
    fn test_convert_rejects_wrong_native_currency() {
        let conversion = eur_to_cad(dec!(1.45));
        let m = Money::new(dec!(100), "USD").unwrap();
        assert!(matches!(
            conversion.convert(&m),
            Err(MoneyError::CurrencyMismatch(_))
        ));
    }

    #[test]
    fn test_convert_back_divides_by_rate() {
        let conversion = eur_to_cad(dec!(1.45));
        let cad = Money::new(dec!(145), "CAD").unwrap();
        assert_eq!(
            conversion.convert_back(&cad).unwrap(),
            Money::new(dec!(100), "EUR").unwrap()
        );

        let usd = Money::new(dec!(145), "USD").unwrap();
        assert!(matches!(
            conversion.convert_back(&usd),
            Err(MoneyError::CurrencyMismatch(_))
        ));
    }

    #[test]
    fn test_money_convert_to_checks_target() {
        let conversion = eur_to_cad(dec!(2));
        let m = Money::new(dec!(10), "EUR").unwrap();
        assert_eq!(
            m.convert_to("CAD", &conversion).unwrap(),
            Money::new(dec!(20), "CAD").unwrap()
        );
        assert!(matches!(
            m.convert_to("USD", &conversion),
            Err(MoneyError::CurrencyMismatch(_))
        ));
    }
}
