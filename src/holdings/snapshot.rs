use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::holdings_errors::{HoldingError, Result};
use super::holdings_model::AssetHolding;
use crate::money::Money;

/// The scalar fields a repository stores for a holding.
///
/// Loading goes through [`AssetHolding::from_snapshot`], which revalidates
/// the invariants and always starts with an empty event list — reconstruction
/// never replays events. Saving reads [`AssetHolding::to_snapshot`] and must
/// write `version` with a compare-and-set against the previously loaded
/// value; the conflict surfaces there, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingSnapshot {
    pub holding_id: Uuid,
    pub portfolio_id: Uuid,
    pub asset_identifier: String,
    pub total_quantity: Decimal,
    pub cost_basis_amount: Decimal,
    pub base_currency: String,
    pub version: u64,
    pub created_at: DateTime<Utc>,
    pub last_transaction_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AssetHolding {
    /// Reconstructs a holding from stored scalar fields.
    pub fn from_snapshot(snapshot: HoldingSnapshot) -> Result<Self> {
        if snapshot.asset_identifier.trim().is_empty() {
            return Err(HoldingError::Validation(
                "asset identifier cannot be blank".to_string(),
            ));
        }
        if snapshot.total_quantity < Decimal::ZERO {
            return Err(HoldingError::Validation(format!(
                "holding quantity cannot be negative: {}",
                snapshot.total_quantity
            )));
        }

        let total_cost_basis = Money::new(snapshot.cost_basis_amount, &snapshot.base_currency)?;
        if total_cost_basis.is_negative() {
            return Err(HoldingError::Validation(format!(
                "cost basis cannot be negative: {}",
                total_cost_basis
            )));
        }
        if snapshot.total_quantity.is_zero() && !total_cost_basis.is_zero() {
            return Err(HoldingError::Validation(format!(
                "empty position cannot carry a cost basis of {}",
                total_cost_basis
            )));
        }

        let base_currency = total_cost_basis.currency().to_string();
        Ok(AssetHolding::from_parts(
            snapshot.holding_id,
            snapshot.portfolio_id,
            snapshot.asset_identifier.trim().to_string(),
            base_currency,
            snapshot.total_quantity,
            total_cost_basis,
            snapshot.created_at,
            snapshot.last_transaction_at,
            snapshot.updated_at,
            snapshot.version,
        ))
    }

    /// The scalar fields for the repository's compare-and-set write.
    pub fn to_snapshot(&self) -> HoldingSnapshot {
        HoldingSnapshot {
            holding_id: self.holding_id(),
            portfolio_id: self.portfolio_id(),
            asset_identifier: self.asset_identifier().to_string(),
            total_quantity: self.total_quantity(),
            cost_basis_amount: self.total_cost_basis().amount(),
            base_currency: self.base_currency().to_string(),
            version: self.version(),
            created_at: self.created_at(),
            last_transaction_at: self.last_transaction_at(),
            updated_at: self.updated_at(),
        }
    }
}
