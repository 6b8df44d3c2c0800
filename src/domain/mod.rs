pub mod delivery;

// Re-export commonly used types
pub use delivery::{
    ChargeQuote, DeliveryZone, ParseZoneError, RateStrategy, RuralRate, SharedRateStrategy,
    SuburbanRate, UrbanRate,
};

// Re-export ChargeError from support for convenience
pub use crate::support::errors::{ChargeError, ChargeResult};
