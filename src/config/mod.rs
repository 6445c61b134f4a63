//! Configuration module for the trading client
//!
//! This module provides:
//! - Configuration types (`AppConfig`, `ReconnectionPolicy`, `Environment`, `LogLevel`)
//! - Environment-driven resolution (`resolve`, `resolve_from`)
//! - Shared state wrapper (`SharedConfig`)
//! - Logging initialization (`logging::init_logging`)

pub mod constants;
pub mod logging;
mod resolver;
mod types;

// Re-export types
pub use types::{AppConfig, Environment, LogLevel, ReconnectionPolicy, SharedConfig};

// Re-export resolver entry points
pub use resolver::{resolve, resolve_from, EnvReader, ProcessEnv};
