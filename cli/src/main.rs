//! Delivery charge calculator - command line front end
//!
//! ```sh
//! # Quote a single delivery
//! delivery-charge quote --zone suburban --distance 5
//!
//! # Same, as JSON
//! delivery-charge quote --zone rural --distance 12.5 --json
//!
//! # Run the demonstration with a custom config
//! delivery-charge --config ./config.toml demo
//!
//! # Validate config without running anything
//! delivery-charge check
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use delivery_charge::config::{default_config_path, AppConfig, CONFIG_ENV};
use delivery_charge::demo::print_demonstration;
use delivery_charge::{init_tracing, AppError, ChargeCalculator, DeliveryZone};

/// Delivery fee calculator with urban, suburban and rural rates.
#[derive(Parser, Debug)]
#[command(
    name = "delivery-charge",
    version,
    about = "Calculate delivery charges from distance and zone",
    long_about = "Delivery charge calculator.\n\n\
                  Urban deliveries cost 10 per unit of distance, suburban 15, rural 20.\n\n\
                  Default config: ~/.config/delivery-charge/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV, global = true)]
    config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the charge for a single delivery.
    Quote {
        /// Delivery zone: urban, suburban or rural.
        #[arg(short, long)]
        zone: DeliveryZone,

        /// Distance travelled.
        #[arg(short, long, allow_negative_numbers = true)]
        distance: f64,

        /// Print the quote as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run the demonstration across the configured zones.
    Demo {
        /// Override the demonstration distance.
        #[arg(short, long, allow_negative_numbers = true)]
        distance: Option<f64>,
    },

    /// Validate the configuration file and exit.
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            // Fallback tracing init
            init_tracing(&AppConfig::default().logging);
            error!("Failed to load config from {}: {}", config_path.display(), e);
            return Err(AppError::from(e).into());
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config.logging);
    info!("Configuration loaded from {}", config_path.display());

    match cli.command {
        Command::Quote {
            zone,
            distance,
            json,
        } => {
            let calculator = ChargeCalculator::with_strategy(zone.strategy());
            let quote = calculator.quote(distance).map_err(AppError::from)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&quote).map_err(AppError::from)?
                );
            } else {
                println!("{quote}");
            }
        }
        Command::Demo { distance } => {
            if let Some(distance) = distance {
                info!("CLI override: demo distance = {}", distance);
                config.demo.distance = distance;
            }
            print_demonstration(&config.demo).map_err(AppError::from)?;
        }
        Command::Check => {
            let zones: Vec<String> = config.demo.zones.iter().map(ToString::to_string).collect();
            println!("Configuration is valid");
            println!("   Config file : {}", config_path.display());
            println!("   Log level   : {}", config.logging.level);
            println!("   Log format  : {}", config.logging.format);
            println!("   Demo dist.  : {}", config.demo.distance);
            println!("   Demo zones  : {}", zones.join(", "));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_quote_subcommand() {
        let cli = Cli::try_parse_from([
            "delivery-charge",
            "quote",
            "--zone",
            "Rural",
            "--distance",
            "5",
        ])
        .unwrap();
        match cli.command {
            Command::Quote {
                zone,
                distance,
                json,
            } => {
                assert_eq!(zone, DeliveryZone::Rural);
                assert_eq!(distance, 5.0);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn demo_accepts_negative_distance() {
        let cli = Cli::try_parse_from(["delivery-charge", "demo", "--distance", "-5"]).unwrap();
        match cli.command {
            Command::Demo { distance } => assert_eq!(distance, Some(-5.0)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn config_errors_are_app_errors() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[demo\ndistance = ").unwrap();
        let err = AppError::from(AppConfig::load(file.path()).unwrap_err());
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn rejects_unknown_zone() {
        let result = Cli::try_parse_from([
            "delivery-charge",
            "quote",
            "--zone",
            "downtown",
            "--distance",
            "5",
        ]);
        assert!(result.is_err());
    }
}
