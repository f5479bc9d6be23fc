use serde::{Deserialize, Serialize};

/// Classification of a monetary effect on an account: how the balance moves,
/// not why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CashflowType {
    Dividend,
    Interest,
    RentalIncome,
    OtherIncome,
    Deposit,
    Withdrawal,
    Fee,
    OtherOutflow,
    Transfer,
    Unknown,
}

/// Sign rule a cashflow type imposes on its gross and net amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignPolicy {
    NonNegative,
    NonPositive,
    Unconstrained,
}

impl CashflowType {
    /// The sign rule for this type. The match is exhaustive: an unrecognized
    /// type cannot exist at runtime.
    pub fn sign_policy(&self) -> SignPolicy {
        match self {
            CashflowType::Dividend
            | CashflowType::Interest
            | CashflowType::RentalIncome
            | CashflowType::OtherIncome
            | CashflowType::Deposit => SignPolicy::NonNegative,
            CashflowType::Withdrawal | CashflowType::Fee | CashflowType::OtherOutflow => {
                SignPolicy::NonPositive
            }
            CashflowType::Transfer | CashflowType::Unknown => SignPolicy::Unconstrained,
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(
            self,
            CashflowType::Dividend
                | CashflowType::Interest
                | CashflowType::RentalIncome
                | CashflowType::OtherIncome
        )
    }

    pub fn is_outflow(&self) -> bool {
        matches!(
            self,
            CashflowType::Withdrawal | CashflowType::Fee | CashflowType::OtherOutflow
        )
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self, CashflowType::Transfer)
    }
}
