use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::events::DomainEvent;
use super::holdings_errors::{HoldingError, Result};
use crate::constants::{MONEY_ROUNDING, MONEY_SCALE};
use crate::money::{Money, Percentage};

/// A single asset position within a portfolio, tracked under the
/// weighted-average cost model: one running quantity and one blended cost
/// basis, no discrete lots.
///
/// Every monetary input must be denominated in the holding's base currency,
/// which is fixed at creation. Mutating operations validate all preconditions
/// before touching any field, append exactly one domain event and bump
/// `version` by one; queries change nothing. Cross-request conflicts are
/// detected by the persistence layer comparing `version` on write.
#[derive(Debug, Clone)]
pub struct AssetHolding {
    holding_id: Uuid,
    portfolio_id: Uuid,
    asset_identifier: String,
    base_currency: String,

    total_quantity: Decimal,
    total_cost_basis: Money,

    created_at: DateTime<Utc>,
    last_transaction_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: u64,

    uncommitted_events: Vec<DomainEvent>,
}

impl AssetHolding {
    /// Opens a position with an initial purchase. The price currency becomes
    /// the holding's base currency for life.
    pub fn create_initial_holding(
        portfolio_id: Uuid,
        holding_id: Uuid,
        asset_identifier: &str,
        quantity: Decimal,
        price_per_unit: Money,
        transaction_date: DateTime<Utc>,
    ) -> Result<Self> {
        if asset_identifier.trim().is_empty() {
            return Err(HoldingError::Validation(
                "asset identifier cannot be blank".to_string(),
            ));
        }
        validate_strict_positive_quantity(quantity, "quantity")?;
        if !price_per_unit.is_positive() {
            return Err(HoldingError::InvalidOperation(
                "price per unit must be positive".to_string(),
            ));
        }

        let total_cost_basis = price_per_unit.multiply(quantity);

        Ok(AssetHolding {
            holding_id,
            portfolio_id,
            asset_identifier: asset_identifier.trim().to_string(),
            base_currency: price_per_unit.currency().to_string(),
            total_quantity: quantity,
            total_cost_basis,
            created_at: transaction_date,
            last_transaction_at: transaction_date,
            updated_at: transaction_date,
            version: 0,
            uncommitted_events: Vec::new(),
        })
    }

    pub(super) fn from_parts(
        holding_id: Uuid,
        portfolio_id: Uuid,
        asset_identifier: String,
        base_currency: String,
        total_quantity: Decimal,
        total_cost_basis: Money,
        created_at: DateTime<Utc>,
        last_transaction_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        version: u64,
    ) -> Self {
        AssetHolding {
            holding_id,
            portfolio_id,
            asset_identifier,
            base_currency,
            total_quantity,
            total_cost_basis,
            created_at,
            last_transaction_at,
            updated_at,
            version,
            uncommitted_events: Vec::new(),
        }
    }

    // --- Business operations ---

    /// Buys more units. The purchase cost averages into the blended cost
    /// basis.
    pub fn increase_position(
        &mut self,
        quantity: Decimal,
        price_per_unit: &Money,
        transaction_date: DateTime<Utc>,
    ) -> Result<()> {
        validate_strict_positive_quantity(quantity, "quantity")?;
        self.validate_base_currency(price_per_unit)?;
        if !price_per_unit.is_positive() {
            return Err(HoldingError::InvalidOperation(
                "price per unit must be positive".to_string(),
            ));
        }

        let added_cost = price_per_unit.multiply(quantity);
        let new_total_cost_basis = self.total_cost_basis.add(&added_cost)?;

        self.total_quantity += quantity;
        self.total_cost_basis = new_total_cost_basis;
        self.apply_mutation(
            DomainEvent::HoldingIncreased {
                portfolio_id: self.portfolio_id,
                holding_id: self.holding_id,
                quantity,
                price_per_unit: price_per_unit.clone(),
                occurred_at: transaction_date,
            },
            transaction_date,
        );

        debug!(
            "Increased {} by {} @ {}: quantity={}, cost basis={}",
            self.asset_identifier, quantity, price_per_unit, self.total_quantity, self.total_cost_basis
        );
        Ok(())
    }

    /// Sells units at the blended average cost. Realized gain/loss is the
    /// sale proceeds minus the cost basis removed. Fully liquidating forces
    /// the cost basis to exactly zero rather than leaving a rounding
    /// remainder.
    pub fn decrease_position(
        &mut self,
        quantity: Decimal,
        price_per_unit: &Money,
        transaction_date: DateTime<Utc>,
    ) -> Result<()> {
        validate_strict_positive_quantity(quantity, "quantity")?;
        self.validate_base_currency(price_per_unit)?;
        if !price_per_unit.is_positive() {
            return Err(HoldingError::InvalidOperation(
                "price per unit must be positive".to_string(),
            ));
        }
        if quantity > self.total_quantity {
            return Err(HoldingError::InsufficientHolding {
                requested: quantity,
                available: self.total_quantity,
            });
        }

        let average_cost = self.average_cost_basis();
        // the rounded average times the quantity can overshoot the remaining
        // basis; the removed cost is capped so the basis never goes negative
        let sold_cost_basis = average_cost
            .multiply(quantity)
            .min(&self.total_cost_basis)?;
        let proceeds = price_per_unit.multiply(quantity);
        let realized_gain_loss = proceeds.subtract(&sold_cost_basis)?;

        let new_total_quantity = self.total_quantity - quantity;
        let new_total_cost_basis = if new_total_quantity.is_zero() {
            // exact-zero termination
            Money::zero(&self.base_currency)?
        } else {
            self.total_cost_basis.subtract(&sold_cost_basis)?
        };

        self.total_quantity = new_total_quantity;
        self.total_cost_basis = new_total_cost_basis;
        self.apply_mutation(
            DomainEvent::HoldingDecreased {
                portfolio_id: self.portfolio_id,
                holding_id: self.holding_id,
                quantity,
                price_per_unit: price_per_unit.clone(),
                realized_gain_loss: realized_gain_loss.clone(),
                occurred_at: transaction_date,
            },
            transaction_date,
        );

        debug!(
            "Decreased {} by {} @ {}: realized={}, quantity={}, cost basis={}",
            self.asset_identifier,
            quantity,
            price_per_unit,
            realized_gain_loss,
            self.total_quantity,
            self.total_cost_basis
        );
        Ok(())
    }

    /// Records a cash dividend. Quantity and cost basis are untouched: the
    /// cash lands on the account, not the position.
    pub fn record_dividend_received(
        &mut self,
        amount: &Money,
        received_at: DateTime<Utc>,
    ) -> Result<()> {
        if self.is_empty() {
            return Err(HoldingError::InvalidOperation(
                "cannot record a dividend on an empty position".to_string(),
            ));
        }
        self.validate_base_currency(amount)?;
        if amount.is_negative() {
            return Err(HoldingError::InvalidDividendAmount(format!(
                "dividend cannot be negative: {}",
                amount
            )));
        }

        self.apply_mutation(
            DomainEvent::DividendReceived {
                portfolio_id: self.portfolio_id,
                holding_id: self.holding_id,
                amount: amount.clone(),
                occurred_at: received_at,
            },
            received_at,
        );

        debug!("Dividend of {} recorded on {}", amount, self.asset_identifier);
        Ok(())
    }

    /// Reinvests a dividend into additional units. The cost basis grows by
    /// shares times price, not by the raw dividend amount: the dividend is
    /// income already received, now spent on units.
    pub fn process_dividend_reinvestment(
        &mut self,
        dividend_amount: &Money,
        shares_received: Decimal,
        price_per_share: &Money,
        reinvestment_date: DateTime<Utc>,
    ) -> Result<()> {
        validate_strict_positive_quantity(shares_received, "shares received")?;
        if dividend_amount.is_negative() {
            return Err(HoldingError::InvalidDividendAmount(format!(
                "dividend cannot be negative: {}",
                dividend_amount
            )));
        }
        if price_per_share.is_negative() {
            return Err(HoldingError::InvalidArgument(
                "price per share cannot be negative".to_string(),
            ));
        }
        self.validate_base_currency(dividend_amount)?;
        self.validate_base_currency(price_per_share)?;

        let added_cost = price_per_share.multiply(shares_received);
        let new_total_cost_basis = self.total_cost_basis.add(&added_cost)?;

        self.total_quantity += shares_received;
        self.total_cost_basis = new_total_cost_basis;
        self.apply_mutation(
            DomainEvent::DividendReinvested {
                portfolio_id: self.portfolio_id,
                holding_id: self.holding_id,
                dividend_amount: dividend_amount.clone(),
                shares_received,
                price_per_share: price_per_share.clone(),
                occurred_at: reinvestment_date,
            },
            reinvestment_date,
        );

        debug!(
            "Reinvested {} into {} shares of {} @ {}",
            dividend_amount, shares_received, self.asset_identifier, price_per_share
        );
        Ok(())
    }

    // --- Queries ---

    pub fn holding_id(&self) -> Uuid {
        self.holding_id
    }

    pub fn portfolio_id(&self) -> Uuid {
        self.portfolio_id
    }

    pub fn asset_identifier(&self) -> &str {
        &self.asset_identifier
    }

    pub fn base_currency(&self) -> &str {
        &self.base_currency
    }

    pub fn total_quantity(&self) -> Decimal {
        self.total_quantity
    }

    pub fn total_cost_basis(&self) -> &Money {
        &self.total_cost_basis
    }

    /// The blended cost per unit, derived from the running totals. Zero for
    /// an empty position.
    pub fn average_cost_basis(&self) -> Money {
        if self.total_quantity.is_zero() {
            return Money::from_validated(Decimal::ZERO, self.base_currency.clone());
        }
        let per_unit = (self.total_cost_basis.amount() / self.total_quantity)
            .round_dp_with_strategy(MONEY_SCALE, MONEY_ROUNDING);
        Money::from_validated(per_unit, self.base_currency.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.total_quantity.is_zero()
    }

    pub fn has_position(&self) -> bool {
        !self.is_empty()
    }

    /// True once the position is fully closed out; the persistence layer may
    /// prune the row.
    pub fn should_be_removed(&self) -> bool {
        self.is_empty() && self.total_cost_basis.is_zero()
    }

    pub fn can_sell(&self, requested_quantity: Decimal) -> bool {
        self.has_position()
            && requested_quantity > Decimal::ZERO
            && requested_quantity <= self.total_quantity
    }

    pub fn current_market_value(&self, current_price: &Money) -> Result<Money> {
        self.validate_base_currency(current_price)?;
        Ok(current_price.multiply(self.total_quantity))
    }

    pub fn unrealized_gain_loss(&self, current_price: &Money) -> Result<Money> {
        let market_value = self.current_market_value(current_price)?;
        Ok(market_value.subtract(&self.total_cost_basis)?)
    }

    pub fn unrealized_gain_loss_percentage(&self, current_price: &Money) -> Result<Percentage> {
        if self.total_cost_basis.is_zero() {
            return Ok(Percentage::zero());
        }
        let gain_loss = self.unrealized_gain_loss(current_price)?;
        Ok(Percentage::new(
            gain_loss.amount() / self.total_cost_basis.amount(),
        ))
    }

    /// The blended cost basis carried by `quantity` units.
    pub fn cost_basis_for_quantity(&self, quantity: Decimal) -> Result<Money> {
        if quantity > self.total_quantity {
            return Err(HoldingError::InvalidOperation(format!(
                "requested quantity {} exceeds available {}",
                quantity, self.total_quantity
            )));
        }
        Ok(self.average_cost_basis().multiply(quantity))
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_transaction_at(&self) -> DateTime<Utc> {
        self.last_transaction_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    // --- Domain events ---

    /// Pending events as an immutable view, in emission order.
    pub fn uncommitted_events(&self) -> &[DomainEvent] {
        &self.uncommitted_events
    }

    /// Clears the pending events once the caller has published them.
    /// Idempotent; leaves every other field alone so the in-memory state
    /// keeps matching the row written just before the drain.
    pub fn mark_events_as_committed(&mut self) {
        self.uncommitted_events.clear();
    }

    pub fn has_uncommitted_events(&self) -> bool {
        !self.uncommitted_events.is_empty()
    }

    // --- Private helpers ---

    fn apply_mutation(&mut self, event: DomainEvent, transaction_date: DateTime<Utc>) {
        self.uncommitted_events.push(event);
        self.last_transaction_at = transaction_date;
        self.updated_at = Utc::now();
        self.version += 1;
    }

    fn validate_base_currency(&self, money: &Money) -> Result<()> {
        if money.currency() != self.base_currency {
            return Err(HoldingError::CurrencyMismatch {
                expected: self.base_currency.clone(),
                actual: money.currency().to_string(),
            });
        }
        Ok(())
    }
}

/// Zero and negative are distinct failure kinds, on purpose.
fn validate_strict_positive_quantity(quantity: Decimal, field: &str) -> Result<()> {
    if quantity.is_zero() {
        return Err(HoldingError::InvalidQuantity(format!(
            "{} must be positive",
            field
        )));
    }
    if quantity < Decimal::ZERO {
        return Err(HoldingError::InvalidArgument(format!(
            "{} cannot be negative: {}",
            field, quantity
        )));
    }
    Ok(())
}
