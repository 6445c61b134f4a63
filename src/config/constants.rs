//! Environment variable names and fixed endpoint values
//!
//! This module centralizes the environment-variable surface of the resolver
//! and the hardcoded host/path fragments used to build default URLs.

/// Environment-bucket selector variables, in priority order (first set wins).
pub const ENV_BUCKET_VARS: [&str; 2] = ["TRADING_ENV", "APP_ENV"];

/// Forces secure transport schemes when set to the literal `"true"`.
pub const SECURE_SOCKETS_VAR: &str = "SECURE_SOCKETS";

/// Verbatim override for the REST API base URL.
pub const API_BASE_URL_VAR: &str = "API_BASE_URL";

/// Verbatim override for the WebSocket base URL.
pub const WS_BASE_URL_VAR: &str = "WS_BASE_URL";

/// Host used when no URL override is supplied.
pub const DEFAULT_HOST: &str = "trading.local";

/// Path suffix for the REST API endpoint.
pub const API_PATH: &str = "/api";

/// Path suffix for the WebSocket endpoint.
pub const WS_PATH: &str = "/ws";
