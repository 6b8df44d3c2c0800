//! Charge quote record

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Result of a single charge calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChargeQuote {
    /// Name of the strategy that produced the charge
    pub zone: String,
    pub distance: f64,
    pub charge: f64,
    pub quoted_at: DateTime<Utc>,
}

impl ChargeQuote {
    pub fn new(zone: impl Into<String>, distance: f64, charge: f64) -> Self {
        Self {
            zone: zone.into(),
            distance,
            charge,
            quoted_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for ChargeQuote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Charge: {:?}", self.zone, self.charge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_demo_output() {
        let quote = ChargeQuote::new("Urban", 5.0, 50.0);
        assert_eq!(quote.to_string(), "Urban Charge: 50.0");
    }

    #[test]
    fn display_keeps_fractional_charge() {
        let quote = ChargeQuote::new("Suburban", 7.25, 108.75);
        assert_eq!(quote.to_string(), "Suburban Charge: 108.75");
    }

    #[test]
    fn serializes_to_json() {
        let quote = ChargeQuote::new("Rural", 5.0, 100.0);
        let value = serde_json::to_value(&quote).unwrap();
        assert_eq!(value["zone"], "Rural");
        assert_eq!(value["distance"], 5.0);
        assert_eq!(value["charge"], 100.0);
        assert!(value["quoted_at"].is_string());
    }
}
