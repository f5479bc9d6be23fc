pub mod events;
pub mod holdings_errors;
pub mod holdings_model;
pub mod snapshot;

// Re-export the main public entry points and types
pub use events::DomainEvent;
pub use holdings_errors::HoldingError;
pub use holdings_model::AssetHolding;
pub use snapshot::HoldingSnapshot;
