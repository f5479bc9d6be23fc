use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::cashflow_errors::{CashflowError, Result};
use super::cashflow_model::{CashflowType, SignPolicy};
use crate::money::MonetaryAmount;

/// Metadata key under which a withholding tax rate (a fraction, e.g. 0.15)
/// may be attached to an effect.
pub const WITHHOLDING_TAX_RATE_KEY: &str = "withholdingTaxRate";

/// A validated cash effect on an account: a gross/net amount pair classified
/// by cashflow type.
///
/// Construction enforces the sign and currency rules for the type; an
/// `AccountEffect` that exists is consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountEffect {
    gross: MonetaryAmount,
    net: MonetaryAmount,
    cashflow_type: CashflowType,
    metadata: HashMap<String, String>,
    fee: MonetaryAmount,
}

impl AccountEffect {
    pub fn new(
        gross: MonetaryAmount,
        net: MonetaryAmount,
        cashflow_type: CashflowType,
        metadata: HashMap<String, String>,
    ) -> Result<Self> {
        if gross.is_zero() && net.is_zero() {
            return Err(CashflowError::ZeroAmount);
        }

        if gross.native().currency() != net.native().currency() {
            return Err(CashflowError::CurrencyMismatch(format!(
                "gross is in {} but net is in {}",
                gross.native().currency(),
                net.native().currency()
            )));
        }

        if gross.conversion().to_currency() != net.conversion().to_currency() {
            return Err(CashflowError::CurrencyMismatch(format!(
                "gross converts to {} but net converts to {}",
                gross.conversion().to_currency(),
                net.conversion().to_currency()
            )));
        }

        match cashflow_type.sign_policy() {
            SignPolicy::NonNegative => {
                if gross.is_negative() || net.is_negative() {
                    return Err(CashflowError::SignViolation(format!(
                        "{:?} amounts must not be negative",
                        cashflow_type
                    )));
                }
            }
            SignPolicy::NonPositive => {
                if gross.is_positive() || net.is_positive() {
                    return Err(CashflowError::SignViolation(format!(
                        "{:?} amounts must not be positive",
                        cashflow_type
                    )));
                }
            }
            SignPolicy::Unconstrained => {}
        }

        let fee = gross.subtract(&net)?.abs();

        Ok(AccountEffect {
            gross,
            net,
            cashflow_type,
            metadata,
            fee,
        })
    }

    pub fn gross(&self) -> &MonetaryAmount {
        &self.gross
    }

    pub fn net(&self) -> &MonetaryAmount {
        &self.net
    }

    pub fn cashflow_type(&self) -> CashflowType {
        self.cashflow_type
    }

    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// The absolute difference between gross and net.
    pub fn fee_amount(&self) -> &MonetaryAmount {
        &self.fee
    }

    pub fn has_fees(&self) -> bool {
        !self.fee.is_zero()
    }

    pub fn is_income_transaction(&self) -> bool {
        self.cashflow_type.is_income()
    }

    pub fn is_expense_transaction(&self) -> bool {
        self.cashflow_type.is_outflow()
    }

    pub fn is_deposit_transaction(&self) -> bool {
        self.cashflow_type == CashflowType::Deposit
    }

    pub fn is_transfer_transaction(&self) -> bool {
        self.cashflow_type.is_transfer()
    }

    pub fn is_unknown_transaction(&self) -> bool {
        self.cashflow_type == CashflowType::Unknown
    }

    pub fn is_positive_impact(&self) -> bool {
        self.net.is_positive()
    }

    pub fn is_negative_impact(&self) -> bool {
        self.net.is_negative()
    }

    pub fn is_multi_currency(&self) -> bool {
        self.gross.is_multi_currency() || self.net.is_multi_currency()
    }

    pub fn has_withholding_tax(&self) -> bool {
        self.metadata.contains_key(WITHHOLDING_TAX_RATE_KEY)
    }

    /// The withholding tax rate from metadata. A rate that is attached but
    /// not a decimal is an error, not an absent rate.
    pub fn withholding_tax_rate(&self) -> Result<Option<Decimal>> {
        match self.metadata.get(WITHHOLDING_TAX_RATE_KEY) {
            None => Ok(None),
            Some(raw) => Decimal::from_str(raw).map(Some).map_err(|_| {
                CashflowError::InvalidMetadata(format!(
                    "withholding tax rate is not a decimal: {raw}"
                ))
            }),
        }
    }

    /// Gross times the withholding rate; zero in the gross native currency
    /// when no rate is attached.
    pub fn withholding_tax_amount(&self) -> Result<MonetaryAmount> {
        match self.withholding_tax_rate()? {
            Some(rate) => Ok(self.gross.multiply(rate)),
            None => Ok(MonetaryAmount::zero(self.gross.native().currency())?),
        }
    }
}
