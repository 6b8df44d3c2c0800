//! Delivery zone enumeration

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::strategy::{RuralRate, SharedRateStrategy, SuburbanRate, UrbanRate};

/// Rate tier a delivery falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryZone {
    Urban,
    Suburban,
    Rural,
}

impl DeliveryZone {
    pub const ALL: [DeliveryZone; 3] = [Self::Urban, Self::Suburban, Self::Rural];

    /// Charge per unit of distance for this zone
    pub fn rate(&self) -> f64 {
        match self {
            Self::Urban => UrbanRate::RATE,
            Self::Suburban => SuburbanRate::RATE,
            Self::Rural => RuralRate::RATE,
        }
    }

    /// Build the rate strategy for this zone
    pub fn strategy(&self) -> SharedRateStrategy {
        match self {
            Self::Urban => Arc::new(UrbanRate),
            Self::Suburban => Arc::new(SuburbanRate),
            Self::Rural => Arc::new(RuralRate),
        }
    }
}

impl std::fmt::Display for DeliveryZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Urban => write!(f, "Urban"),
            Self::Suburban => write!(f, "Suburban"),
            Self::Rural => write!(f, "Rural"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown delivery zone: {0} (expected urban, suburban or rural)")]
pub struct ParseZoneError(pub String);

impl FromStr for DeliveryZone {
    type Err = ParseZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "urban" => Ok(Self::Urban),
            "suburban" => Ok(Self::Suburban),
            "rural" => Ok(Self::Rural),
            _ => Err(ParseZoneError(s.to_string())),
        }
    }
}
