//! # Front Desk Entry Point
//!
//! ```bash
//! # Interactive session, random room allocation
//! cargo run -p front-desk
//!
//! # Reproducible allocation and debug logs on stderr
//! cargo run -p front-desk -- --seed 42 --log-filter debug
//! ```

use clap::Parser;
use front_desk::config::DeskConfig;
use front_desk::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(DeskConfig::load()?);

    front_desk::init_tracing(&config.log_filter);
    front_desk::run(config)
}
