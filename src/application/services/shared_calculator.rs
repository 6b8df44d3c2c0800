//! Thread-safe wrapper around [`ChargeCalculator`]

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::charge_calculator::ChargeCalculator;
use crate::domain::{ChargeQuote, ChargeResult, SharedRateStrategy};

/// Charge calculator that can be reconfigured from several tasks
#[derive(Debug, Default)]
pub struct SharedChargeCalculator {
    inner: RwLock<ChargeCalculator>,
}

/// Shared, reference-counted calculator
pub type SharedCalculator = Arc<SharedChargeCalculator>;

impl SharedChargeCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap in `Arc` for shared ownership
    pub fn shared() -> SharedCalculator {
        Arc::new(Self::new())
    }

    pub async fn set_strategy(&self, strategy: SharedRateStrategy) {
        let mut calculator = self.inner.write().await;
        calculator.set_strategy(strategy);
    }

    pub async fn calculate_charge(&self, distance: f64) -> ChargeResult<f64> {
        self.inner.read().await.calculate_charge(distance)
    }

    pub async fn quote(&self, distance: f64) -> ChargeResult<ChargeQuote> {
        self.inner.read().await.quote(distance)
    }

    /// Copy of the current calculator state
    pub async fn snapshot(&self) -> ChargeCalculator {
        let calculator = self.inner.read().await.clone();
        debug!(strategy = ?calculator.strategy_name(), "Charge calculator snapshot taken");
        calculator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChargeError, DeliveryZone};

    #[tokio::test]
    async fn shared_calculator_requires_strategy() {
        let calculator = SharedChargeCalculator::shared();
        assert_eq!(
            calculator.calculate_charge(1.0).await,
            Err(ChargeError::StrategyNotSet)
        );
    }

    #[tokio::test]
    async fn strategy_swaps_are_visible_to_other_tasks() {
        let calculator = SharedChargeCalculator::shared();

        let writer = calculator.clone();
        tokio::spawn(async move {
            writer.set_strategy(DeliveryZone::Suburban.strategy()).await;
        })
        .await
        .expect("writer task panicked");

        assert_eq!(calculator.calculate_charge(5.0).await, Ok(75.0));
        let quote = calculator.quote(2.0).await.unwrap();
        assert_eq!(quote.zone, "Suburban");
        assert_eq!(quote.charge, 30.0);
    }

    #[tokio::test]
    async fn concurrent_readers_see_a_consistent_rate() {
        let calculator = SharedChargeCalculator::shared();
        calculator.set_strategy(DeliveryZone::Rural.strategy()).await;

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let calc = calculator.clone();
                tokio::spawn(async move { calc.calculate_charge(i as f64).await })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let charge = handle.await.expect("reader task panicked").unwrap();
            assert_eq!(charge, i as f64 * 20.0);
        }

        let snapshot = calculator.snapshot().await;
        assert_eq!(snapshot.strategy_name(), Some("Rural"));
    }
}
