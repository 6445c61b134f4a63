//! Trading Client - Configuration Entry Point
//!
//! This binary:
//! 1. Loads environment variables from .env (if present)
//! 2. Resolves the application configuration
//! 3. Initializes logging from the resolved level
//! 4. Reports the resolved record as JSON
//!
//! The resolved `AppConfig` is the single configuration value handed to
//! every consumer (network client, reconnection engine, logger) for the
//! lifetime of the process.

use trading_client::config::{self, logging};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenvy::dotenv().ok();

    // Resolve configuration once; the record is immutable from here on.
    // No subscriber is installed yet, so the resolver's own status events
    // are dropped; log_summary re-emits them below.
    let config = config::resolve();

    // Logging verbosity defaults to the resolved level (RUST_LOG overrides)
    logging::init_logging(config.log_level);

    config.log_summary();
    config.validate()?;

    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
