//! Trading Client - Configuration Layer
//!
//! Minimal implementation focusing on:
//! - Environment-driven configuration resolution (`config::resolve`)
//! - Per-environment presets (log level, secure sockets, reconnection policy)
//! - Logging initialization from the resolved configuration

pub mod config;
pub mod error;

pub use error::AppError;
