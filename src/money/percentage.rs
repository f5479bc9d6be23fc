use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{PERCENTAGE_ROUNDING, PERCENTAGE_SCALE};

/// A percentage stored as a fraction: 0.45 means 45%.
///
/// The value is kept at [`PERCENTAGE_SCALE`] fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Percentage {
    value: Decimal,
}

impl Percentage {
    pub fn new(value: Decimal) -> Self {
        let mut value = value.round_dp_with_strategy(PERCENTAGE_SCALE, PERCENTAGE_ROUNDING);
        value.rescale(PERCENTAGE_SCALE);
        Percentage { value }
    }

    pub fn zero() -> Self {
        Percentage::new(Decimal::ZERO)
    }

    /// Builds from a human-readable percent: `from_percent(45)` is 0.45.
    pub fn from_percent(percent: Decimal) -> Self {
        Percentage::new(percent / Decimal::ONE_HUNDRED)
    }

    /// The fraction itself, e.g. 0.45.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// The human-readable percent, e.g. 45 for a stored 0.45.
    pub fn to_percent(&self) -> Decimal {
        self.value * Decimal::ONE_HUNDRED
    }
}
