//! Charge calculator service
//!
//! Holds the active [`RateStrategy`] and delegates charge computation to it.
//! The strategy can be swapped at any time; computing a charge before one
//! is installed fails with [`ChargeError::StrategyNotSet`].

use tracing::{debug, info};

use crate::domain::{ChargeError, ChargeQuote, ChargeResult, SharedRateStrategy};

/// Context object for delivery charge calculation
#[derive(Clone, Default)]
pub struct ChargeCalculator {
    strategy: Option<SharedRateStrategy>,
}

impl ChargeCalculator {
    pub fn new() -> Self {
        Self { strategy: None }
    }

    pub fn with_strategy(strategy: SharedRateStrategy) -> Self {
        let mut calculator = Self::new();
        calculator.set_strategy(strategy);
        calculator
    }

    /// Replace the active strategy
    pub fn set_strategy(&mut self, strategy: SharedRateStrategy) {
        info!(
            strategy = strategy.name(),
            rate = strategy.rate(),
            "Delivery charge strategy installed"
        );
        self.strategy = Some(strategy);
    }

    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_ref().map(|s| s.name())
    }

    /// Compute the charge for `distance` with the active strategy
    pub fn calculate_charge(&self, distance: f64) -> ChargeResult<f64> {
        let strategy = self.strategy.as_ref().ok_or(ChargeError::StrategyNotSet)?;
        let charge = strategy.compute_charge(distance);
        debug!(strategy = strategy.name(), distance, charge, "Delivery charge calculated");
        Ok(charge)
    }

    pub fn quote(&self, distance: f64) -> ChargeResult<ChargeQuote> {
        let strategy = self.strategy.as_ref().ok_or(ChargeError::StrategyNotSet)?;
        let charge = strategy.compute_charge(distance);
        Ok(ChargeQuote::new(strategy.name(), distance, charge))
    }
}

impl std::fmt::Debug for ChargeCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChargeCalculator")
            .field("strategy", &self.strategy_name())
            .finish()
    }
}

// ── Tests ──────────────────────────────────────────────────────
