//! Demonstration driver
//!
//! Installs each configured zone's strategy in turn and computes the
//! charge for a fixed distance.

use tracing::info;

use crate::application::services::ChargeCalculator;
use crate::config::DemoConfig;
use crate::domain::{ChargeQuote, ChargeResult};

/// Run the demonstration and return the quotes in zone order
pub fn run_demonstration(config: &DemoConfig) -> ChargeResult<Vec<ChargeQuote>> {
    let mut calculator = ChargeCalculator::new();
    let mut quotes = Vec::with_capacity(config.zones.len());

    for zone in &config.zones {
        calculator.set_strategy(zone.strategy());
        quotes.push(calculator.quote(config.distance)?);
    }

    info!(
        distance = config.distance,
        quotes = quotes.len(),
        "Demonstration finished"
    );
    Ok(quotes)
}

/// Run the demonstration and print one line per zone
pub fn print_demonstration(config: &DemoConfig) -> ChargeResult<()> {
    for quote in run_demonstration(config)? {
        println!("{quote}");
    }
    Ok(())
}
