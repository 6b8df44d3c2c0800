//! # Delivery Charge Calculator
//!
//! Computes delivery fees from a travelled distance using interchangeable
//! rate strategies (urban, suburban, rural).
//!
//! ## Architecture
//!
//! - **domain**: rate strategies, delivery zones and quotes
//! - **application**: the charge calculator service
//! - **config**: TOML application configuration
//! - **logging**: tracing subscriber setup
//! - **demo**: the demonstration driver
//! - **support**: error types
//!
//! ```rust
//! use delivery_charge::{ChargeCalculator, DeliveryZone};
//!
//! let mut calculator = ChargeCalculator::new();
//! calculator.set_strategy(DeliveryZone::Suburban.strategy());
//! assert_eq!(calculator.calculate_charge(5.0), Ok(75.0));
//! ```

pub mod application;
pub mod config;
pub mod demo;
pub mod domain;
pub mod logging;
pub mod support;

pub use config::{default_config_path, resolve_config_path, AppConfig};

pub use application::services::{ChargeCalculator, SharedCalculator, SharedChargeCalculator};
pub use domain::{
    ChargeError, ChargeQuote, DeliveryZone, RateStrategy, RuralRate, SuburbanRate, UrbanRate,
};
pub use logging::init_tracing;
pub use support::errors::AppError;
