//! Logging initialization for the trading client
//!
//! Provides configurable JSON/Pretty logging output.
//!
//! # Usage
//! ```rust,ignore
//! use trading_client::config::{self, logging};
//! let cfg = config::resolve();
//! logging::init_logging(cfg.log_level);
//! ```
//!
//! # Environment Variables
//! - `LOG_FORMAT`: Output format - `json` (default) or `pretty`
//! - `RUST_LOG`: Log level filter; overrides the resolved level when set

use tracing_subscriber::EnvFilter;

use super::types::LogLevel;

/// Initialize logging with configurable format
///
/// Reads `LOG_FORMAT` from environment:
/// - `json` (default): Machine-parseable JSON output for production
/// - `pretty`: Human-readable output for development
///
/// The filter comes from `RUST_LOG` when set; otherwise the resolved
/// configuration's log level is used, falling back to `info`.
pub fn init_logging(default_level: Option<LogLevel>) {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let fallback = default_level.map(LogLevel::as_filter).unwrap_or("info");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    if log_format == "pretty" {
        // Human-readable for development
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .pretty()
            .init();
    } else {
        // JSON for production (default)
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init();
    }
}
