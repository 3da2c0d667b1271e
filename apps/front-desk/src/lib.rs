//! # Hotel Baratie Front Desk
//!
//! Operator console over `baratie-core`.
//!
//! ## Startup Sequence
//! 1. Parse flags, load `DeskConfig` from the environment, apply overrides
//! 2. Initialize tracing (stderr, so logs never mix with prompts)
//! 3. Build the `HotelRegistry` (seeded if configured) with the admin account
//! 4. Run the `Session` on stdin/stdout until Exit or end of input

pub mod config;
pub mod error;
pub mod render;
pub mod session;

use std::io;

use baratie_core::HotelRegistry;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{DeskConfig, DEFAULT_LOG_FILTER};
use crate::session::Session;

/// Command-line flags. Each one overrides its environment variable.
#[derive(Debug, Parser)]
#[command(name = "front-desk")]
#[command(about = "Hotel front-desk console: rooms, guests, food orders and billing")]
pub struct Cli {
    /// Seed for room allocation (reproducible sessions)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Name shown in the welcome banner
    #[arg(long)]
    pub hotel_name: Option<String>,

    /// tracing filter directive, e.g. "debug" or "baratie_core=info"
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl Cli {
    /// Layers the flags on top of `config`.
    pub fn apply(self, mut config: DeskConfig) -> DeskConfig {
        if let Some(seed) = self.seed {
            config.room_seed = Some(seed);
        }
        if let Some(name) = self.hotel_name {
            config.hotel_name = name;
        }
        if let Some(filter) = self.log_filter {
            config.log_filter = filter;
        }
        config
    }
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `filter` is used, falling back to
/// the default if it does not parse.
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Builds the hotel described by `config` and runs one operator session
/// on the process's stdin/stdout.
pub fn run(config: DeskConfig) -> anyhow::Result<()> {
    let hotel = match config.room_seed {
        Some(seed) => HotelRegistry::seeded(seed),
        None => HotelRegistry::new(),
    };
    let mut hotel = hotel.with_credentials(vec![config.credentials()]);

    info!(
        hotel = %config.hotel_name,
        seeded = config.room_seed.is_some(),
        "front desk starting"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut hotel, config.hotel_name.as_str(), stdin.lock(), stdout.lock()).run()?;

    info!("front desk closed");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["front-desk", "--seed", "7", "--hotel-name", "Baratie East"]);
        let config = cli.apply(DeskConfig::default());

        assert_eq!(config.room_seed, Some(7));
        assert_eq!(config.hotel_name, "Baratie East");
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let base = DeskConfig {
            room_seed: Some(3),
            ..DeskConfig::default()
        };
        let config = Cli::parse_from(["front-desk"]).apply(base.clone());
        assert_eq!(config, base);
    }
}
