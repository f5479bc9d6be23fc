use rust_decimal::RoundingStrategy;

/// Decimal precision for monetary amounts
pub const MONEY_SCALE: u32 = 4;

/// Decimal precision for percentage fractions (0.45 == 45%)
pub const PERCENTAGE_SCALE: u32 = 8;

/// Decimal precision for exchange rates
pub const FOREX_SCALE: u32 = 6;

/// Rounding for monetary amounts. Half-to-even keeps repeated
/// cost-basis arithmetic free of directional bias.
pub const MONEY_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointNearestEven;

/// Rounding for percentage fractions
pub const PERCENTAGE_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Rounding for exchange rates
pub const FOREX_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;
