//! Configuration types for the trading client
//!
//! This module defines the immutable configuration record produced once at
//! startup and shared read-only across the application via `Arc<AppConfig>`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::error::AppError;

// ============================================================================
// Type Aliases
// ============================================================================

/// Type alias for shared configuration access across tasks.
///
/// The record is immutable for the process lifetime, so a plain `Arc`
/// suffices; no lock is needed.
pub type SharedConfig = Arc<AppConfig>;

// ============================================================================
// Enums
// ============================================================================

/// Deployment environment bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    /// Map a raw bucket string to an environment.
    ///
    /// Any value other than the literal `"production"` collapses into
    /// `Development`, including `"test"` and typos. The `Test` variant
    /// exists in the type but is never produced here.
    pub fn from_bucket(bucket: &str) -> Self {
        match bucket {
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
            Environment::Test => write!(f, "test"),
        }
    }
}

/// Verbosity hint handed to the logging collaborator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive string accepted by `tracing_subscriber::EnvFilter`.
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Trace => write!(f, "TRACE"),
        }
    }
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Backoff parameters consumed by an external reconnection engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReconnectionPolicy {
    /// Delay before the first reconnection attempt
    pub initial_delay_ms: u64,
    /// Upper bound on the backoff delay
    pub max_delay_ms: u64,
    /// Random jitter applied to each delay, in [0, 1]
    pub jitter_factor: f64,
    /// Attempts before giving up (0 = no retries)
    pub max_attempts: u32,
}

impl ReconnectionPolicy {
    /// Preset used outside production: fast retries, generous jitter.
    pub fn development() -> Self {
        Self {
            initial_delay_ms: 1000,
            max_delay_ms: 10_000,
            jitter_factor: 0.5,
            max_attempts: 5,
        }
    }

    /// Production preset: longer backoff ceiling, more attempts.
    pub fn production() -> Self {
        Self {
            initial_delay_ms: 1000,
            max_delay_ms: 30_000,
            jitter_factor: 0.3,
            max_attempts: 10,
        }
    }

    /// Validate backoff parameter rules
    pub fn validate(&self) -> Result<(), AppError> {
        // Rule: initial delay must be positive
        if self.initial_delay_ms == 0 {
            return Err(AppError::Config(
                "Reconnection: initial_delay_ms must be > 0".to_string(),
            ));
        }

        // Rule: max_delay_ms >= initial_delay_ms
        if self.max_delay_ms < self.initial_delay_ms {
            return Err(AppError::Config(format!(
                "Reconnection: max_delay_ms ({}) must be >= initial_delay_ms ({})",
                self.max_delay_ms, self.initial_delay_ms
            )));
        }

        // Rule: jitter_factor in [0, 1]
        if !(0.0..=1.0).contains(&self.jitter_factor) {
            return Err(AppError::Config(format!(
                "Reconnection: jitter_factor must be in [0, 1], got {}",
                self.jitter_factor
            )));
        }

        Ok(())
    }
}

/// Root application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// REST API base URL
    pub api_base_url: String,
    /// WebSocket base URL
    pub ws_base_url: String,
    /// Resolved environment bucket
    pub environment: Environment,
    /// Verbosity hint for the logging collaborator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    /// Whether transport must use encrypted schemes
    pub secure_sockets: bool,
    /// Backoff parameters for the reconnection engine
    pub reconnection: ReconnectionPolicy,
}

impl AppConfig {
    /// Validate configuration rules
    ///
    /// The resolver never produces an invalid record, but callers that
    /// accept records from other sources can enforce the invariants here.
    /// URL overrides are accepted verbatim at resolution time, so scheme
    /// consistency with `secure_sockets` is not checked.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_base_url.trim().is_empty() {
            return Err(AppError::Config(
                "api_base_url cannot be empty".to_string(),
            ));
        }

        if self.ws_base_url.trim().is_empty() {
            return Err(AppError::Config(
                "ws_base_url cannot be empty".to_string(),
            ));
        }

        self.reconnection.validate()
    }

    /// Emit the two startup status lines for this configuration.
    pub fn log_summary(&self) {
        info!("Configuration loaded for env: {}", self.environment);
        info!("Secure Sockets: {}", self.secure_sockets);
    }

    /// Convert to shared state wrapper for cross-task access
    pub fn into_shared(self) -> SharedConfig {
        Arc::new(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
