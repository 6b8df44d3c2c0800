//! Delivery aggregate
//!
//! Contains the rate strategies, the zone enumeration that names them, and
//! the quote record produced by a calculation.

pub mod quote;
pub mod strategy;
pub mod zone;

pub use quote::ChargeQuote;
pub use strategy::{RateStrategy, RuralRate, SharedRateStrategy, SuburbanRate, UrbanRate};
pub use zone::{DeliveryZone, ParseZoneError};
