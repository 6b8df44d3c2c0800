//! Rate strategies for delivery charges

use std::sync::Arc;

use tracing::debug;

/// Computes a delivery charge from a travelled distance.
///
/// Implementations are stateless and deterministic; the only side effect
/// allowed is a diagnostic trace event. Negative distances are not
/// rejected and yield `distance * rate`.
pub trait RateStrategy: Send + Sync {
    /// Human-readable strategy name, e.g. `Urban`
    fn name(&self) -> &'static str;

    /// Charge per unit of distance
    fn rate(&self) -> f64;

    fn compute_charge(&self, distance: f64) -> f64 {
        debug!(strategy = self.name(), distance, "Computing delivery charge");
        distance * self.rate()
    }
}

/// Shared, reference-counted strategy handle
pub type SharedRateStrategy = Arc<dyn RateStrategy>;

/// City-centre deliveries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrbanRate;

impl UrbanRate {
    pub const RATE: f64 = 10.0;
}

impl RateStrategy for UrbanRate {
    fn name(&self) -> &'static str {
        "Urban"
    }

    fn rate(&self) -> f64 {
        Self::RATE
    }
}

/// Deliveries to the outskirts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuburbanRate;

impl SuburbanRate {
    pub const RATE: f64 = 15.0;
}

impl RateStrategy for SuburbanRate {
    fn name(&self) -> &'static str {
        "Suburban"
    }

    fn rate(&self) -> f64 {
        Self::RATE
    }
}

/// Countryside deliveries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuralRate;

impl RuralRate {
    pub const RATE: f64 = 20.0;
}

impl RateStrategy for RuralRate {
    fn name(&self) -> &'static str {
        "Rural"
    }

    fn rate(&self) -> f64 {
        Self::RATE
    }
}

// ── Tests ──────────────────────────────────────────────────────
