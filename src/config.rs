//! Configuration module
//!
//! Application settings are read from a TOML file. Every section is
//! optional; anything left out falls back to its default.
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "pretty"
//!
//! [demo]
//! distance = 5.0
//! zones = ["urban", "suburban", "rural"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::DeliveryZone;
use crate::support::errors::ConfigError;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "DELIVERY_CHARGE_CONFIG";

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub demo: DemoConfig,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Demonstration run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub distance: f64,
    /// Zones exercised, in order
    pub zones: Vec<DeliveryZone>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            distance: 5.0,
            zones: DeliveryZone::ALL.to_vec(),
        }
    }
}

impl AppConfig {
    /// Load config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

/// Path to the config file: `$DELIVERY_CHARGE_CONFIG`, else
/// `<config dir>/delivery-charge/config.toml`, else `./config.toml`
pub fn resolve_config_path() -> PathBuf {
    std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_config_path())
}

pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("delivery-charge").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.demo.distance, 5.0);
        assert_eq!(cfg.demo.zones, DeliveryZone::ALL.to_vec());
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[demo]\ndistance = 12.5").unwrap();

        let cfg = AppConfig::load(file.path()).unwrap();
        assert_eq!(cfg.demo.distance, 12.5);
        assert_eq!(cfg.demo.zones.len(), 3);
        assert_eq!(cfg.logging, LoggingConfig::default());
    }

    #[test]
    fn zones_parse_from_lowercase_names() {
        let cfg = AppConfig::from_toml(
            r#"
            [logging]
            level = "debug"
            format = "json"

            [demo]
            zones = ["rural", "urban"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.logging.format, "json");
        assert_eq!(cfg.demo.zones, vec![DeliveryZone::Rural, DeliveryZone::Urban]);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[demo\ndistance = ").unwrap();

        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unknown_zone_is_an_error() {
        assert!(AppConfig::from_toml("[demo]\nzones = [\"downtown\"]").is_err());
    }

    #[test]
    fn default_path_ends_with_config_toml() {
        assert!(default_config_path().ends_with("config.toml"));
    }
}
