use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;

/// Domain events emitted by [`AssetHolding`](super::AssetHolding) mutations.
///
/// Every variant carries the owning portfolio and holding ids plus the
/// transaction timestamp. Serialized with an `eventType` tag so an event sink
/// can route payloads without inspecting their shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "eventType", rename_all = "camelCase")]
pub enum DomainEvent {
    #[serde(rename_all = "camelCase")]
    HoldingIncreased {
        portfolio_id: Uuid,
        holding_id: Uuid,
        quantity: Decimal,
        price_per_unit: Money,
        occurred_at: DateTime<Utc>,
    },
    #[serde(rename_all = "camelCase")]
    HoldingDecreased {
        portfolio_id: Uuid,
        holding_id: Uuid,
        quantity: Decimal,
        price_per_unit: Money,
        realized_gain_loss: Money,
        occurred_at: DateTime<Utc>,
    },
    #[serde(rename_all = "camelCase")]
    DividendReceived {
        portfolio_id: Uuid,
        holding_id: Uuid,
        amount: Money,
        occurred_at: DateTime<Utc>,
    },
    #[serde(rename_all = "camelCase")]
    DividendReinvested {
        portfolio_id: Uuid,
        holding_id: Uuid,
        dividend_amount: Money,
        shares_received: Decimal,
        price_per_share: Money,
        occurred_at: DateTime<Utc>,
    },
}

impl DomainEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::HoldingIncreased { .. } => "holdingIncreased",
            DomainEvent::HoldingDecreased { .. } => "holdingDecreased",
            DomainEvent::DividendReceived { .. } => "dividendReceived",
            DomainEvent::DividendReinvested { .. } => "dividendReinvested",
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            DomainEvent::HoldingIncreased { occurred_at, .. }
            | DomainEvent::HoldingDecreased { occurred_at, .. }
            | DomainEvent::DividendReceived { occurred_at, .. }
            | DomainEvent::DividendReinvested { occurred_at, .. } => *occurred_at,
        }
    }

    pub fn portfolio_id(&self) -> Uuid {
        match self {
            DomainEvent::HoldingIncreased { portfolio_id, .. }
            | DomainEvent::HoldingDecreased { portfolio_id, .. }
            | DomainEvent::DividendReceived { portfolio_id, .. }
            | DomainEvent::DividendReinvested { portfolio_id, .. } => *portfolio_id,
        }
    }

    pub fn holding_id(&self) -> Uuid {
        match self {
            DomainEvent::HoldingIncreased { holding_id, .. }
            | DomainEvent::HoldingDecreased { holding_id, .. }
            | DomainEvent::DividendReceived { holding_id, .. }
            | DomainEvent::DividendReinvested { holding_id, .. } => *holding_id,
        }
    }
}
