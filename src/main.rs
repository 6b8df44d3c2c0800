//! Delivery charge demonstration.
//!
//! Installs the urban, suburban and rural strategies in turn and prints the
//! charge for each. Reads configuration from TOML
//! (~/.config/delivery-charge/config.toml or `$DELIVERY_CHARGE_CONFIG`).

use tracing::{error, info};

use delivery_charge::config::{resolve_config_path, AppConfig};
use delivery_charge::demo::print_demonstration;
use delivery_charge::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = resolve_config_path();
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg.logging);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_tracing(&cfg.logging);
            error!("Failed to load config: {}. Using defaults.", e);
            cfg
        }
    };

    info!(
        distance = app_cfg.demo.distance,
        zones = app_cfg.demo.zones.len(),
        "Starting delivery charge demonstration"
    );

    if let Err(e) = print_demonstration(&app_cfg.demo) {
        error!("Demonstration failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
