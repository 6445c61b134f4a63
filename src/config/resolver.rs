//! Environment-driven configuration resolution
//!
//! This module derives the immutable `AppConfig` record from environment
//! variables. Resolution is total: missing or malformed inputs fall back to
//! literal defaults, never to an error.

use std::collections::HashMap;

use tracing::info;

use super::constants::{
    API_BASE_URL_VAR, API_PATH, DEFAULT_HOST, ENV_BUCKET_VARS, SECURE_SOCKETS_VAR, WS_BASE_URL_VAR,
    WS_PATH,
};
use super::types::{AppConfig, Environment, LogLevel, ReconnectionPolicy};

/// Read-only view of the environment-variable surface.
///
/// Abstracting the lookup keeps `resolve_from` a pure function of its input
/// and lets tests inject a map instead of mutating the process environment.
pub trait EnvReader {
    fn var(&self, key: &str) -> Option<String>;
}

/// Default reader backed by `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvReader for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvReader for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Resolve the application configuration from the process environment.
///
/// Call once at startup; the returned record is immutable and should be
/// handed to consumers explicitly (see `AppConfig::into_shared`).
pub fn resolve() -> AppConfig {
    resolve_from(&ProcessEnv)
}

/// Resolve the application configuration from an explicit environment reader.
///
/// Derivation:
/// 1. The first non-empty bucket selector wins (an empty value falls through
///    to the next candidate); any value other than the literal `"production"`
///    selects the development preset.
/// 2. Secure transport is forced by the production bucket or by
///    `SECURE_SOCKETS=true`, picking `https`/`wss` over `http`/`ws`.
/// 3. Default base URLs are built from the chosen scheme and the fixed host;
///    a non-empty URL override replaces the computed value verbatim, with no
///    scheme or shape validation.
///
/// Emits two status events reporting the resolved environment and
/// secure-sockets flag; they surface only under an already-installed tracing
/// subscriber. Callers that initialize logging from the resolved level can
/// re-emit them afterwards via `AppConfig::log_summary`.
pub fn resolve_from(env: &impl EnvReader) -> AppConfig {
    let bucket = ENV_BUCKET_VARS
        .iter()
        .find_map(|name| env.var(name).filter(|v| !v.is_empty()))
        .unwrap_or_else(|| "development".to_string());
    let environment = Environment::from_bucket(&bucket);

    let is_secure =
        environment.is_production() || env.var(SECURE_SOCKETS_VAR).as_deref() == Some("true");
    let (api_scheme, ws_scheme) = if is_secure { ("https", "wss") } else { ("http", "ws") };

    let api_base_url = env
        .var(API_BASE_URL_VAR)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| format!("{api_scheme}://{DEFAULT_HOST}{API_PATH}"));
    let ws_base_url = env
        .var(WS_BASE_URL_VAR)
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| format!("{ws_scheme}://{DEFAULT_HOST}{WS_PATH}"));

    let config = match environment {
        Environment::Production => AppConfig {
            api_base_url,
            ws_base_url,
            environment,
            log_level: Some(LogLevel::Warn),
            secure_sockets: true,
            reconnection: ReconnectionPolicy::production(),
        },
        _ => AppConfig {
            api_base_url,
            ws_base_url,
            environment,
            log_level: Some(LogLevel::Debug),
            secure_sockets: is_secure,
            reconnection: ReconnectionPolicy::development(),
        },
    };

    info!("Configuration loaded for env: {}", config.environment);
    info!("Secure Sockets: {}", config.secure_sockets);

    config
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_env_yields_development_preset() {
        let config = resolve_from(&env_with(&[]));

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.log_level, Some(LogLevel::Debug));
        assert!(!config.secure_sockets);
        assert_eq!(config.reconnection, ReconnectionPolicy::development());
        assert_eq!(config.api_base_url, "http://trading.local/api");
        assert_eq!(config.ws_base_url, "ws://trading.local/ws");
    }

    #[test]
    fn test_production_bucket_yields_production_preset() {
        let config = resolve_from(&env_with(&[("TRADING_ENV", "production")]));

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.log_level, Some(LogLevel::Warn));
        assert!(config.secure_sockets);
        assert_eq!(config.reconnection, ReconnectionPolicy::production());
        assert_eq!(config.api_base_url, "https://trading.local/api");
        assert_eq!(config.ws_base_url, "wss://trading.local/ws");
    }

    #[test]
    fn test_unknown_bucket_collapses_to_development() {
        for bucket in ["test", "staging", "PRODUCTION", "prod", "garbage"] {
            let config = resolve_from(&env_with(&[("TRADING_ENV", bucket)]));
            assert_eq!(config.environment, Environment::Development, "bucket: {bucket}");
            assert_eq!(config.reconnection, ReconnectionPolicy::development());
        }
    }

    #[test]
    fn test_first_selector_wins() {
        let config = resolve_from(&env_with(&[
            ("TRADING_ENV", "production"),
            ("APP_ENV", "development"),
        ]));
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_second_selector_used_when_first_unset() {
        let config = resolve_from(&env_with(&[("APP_ENV", "production")]));
        assert_eq!(config.environment, Environment::Production);
    }

    #[test]
    fn test_empty_first_selector_falls_through_to_second() {
        let config = resolve_from(&env_with(&[
            ("TRADING_ENV", ""),
            ("APP_ENV", "production"),
        ]));
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.reconnection, ReconnectionPolicy::production());
    }

    #[test]
    fn test_all_selectors_empty_defaults_to_development() {
        let config = resolve_from(&env_with(&[("TRADING_ENV", ""), ("APP_ENV", "")]));
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_secure_override_forces_secure_schemes_in_development() {
        let config = resolve_from(&env_with(&[("SECURE_SOCKETS", "true")]));

        assert_eq!(config.environment, Environment::Development);
        assert!(config.secure_sockets);
        assert_eq!(config.api_base_url, "https://trading.local/api");
        assert_eq!(config.ws_base_url, "wss://trading.local/ws");
        // Preset is otherwise untouched
        assert_eq!(config.log_level, Some(LogLevel::Debug));
        assert_eq!(config.reconnection, ReconnectionPolicy::development());
    }

    #[test]
    fn test_secure_override_requires_exact_literal() {
        for value in ["TRUE", "True", "1", "yes", ""] {
            let config = resolve_from(&env_with(&[("SECURE_SOCKETS", value)]));
            assert!(!config.secure_sockets, "value: {value:?}");
            assert_eq!(config.api_base_url, "http://trading.local/api");
        }
    }

    #[test]
    fn test_default_urls_share_host_and_scheme_pairing() {
        let insecure = resolve_from(&env_with(&[]));
        assert!(insecure.api_base_url.ends_with("/api"));
        assert!(insecure.ws_base_url.ends_with("/ws"));
        assert!(insecure.api_base_url.starts_with("http://trading.local"));
        assert!(insecure.ws_base_url.starts_with("ws://trading.local"));

        let secure = resolve_from(&env_with(&[("TRADING_ENV", "production")]));
        assert!(secure.api_base_url.starts_with("https://trading.local"));
        assert!(secure.ws_base_url.starts_with("wss://trading.local"));
    }

    #[test]
    fn test_url_overrides_pass_through_verbatim() {
        let config = resolve_from(&env_with(&[
            ("API_BASE_URL", "http://localhost:9000/v2"),
            ("WS_BASE_URL", "ws://localhost:9001/stream"),
        ]));

        assert_eq!(config.api_base_url, "http://localhost:9000/v2");
        assert_eq!(config.ws_base_url, "ws://localhost:9001/stream");
    }

    #[test]
    fn test_url_override_not_validated_against_secure_flag() {
        // Known gap: an insecure override is accepted even in production
        let config = resolve_from(&env_with(&[
            ("TRADING_ENV", "production"),
            ("API_BASE_URL", "http://plain.example.com/api"),
        ]));

        assert!(config.secure_sockets);
        assert_eq!(config.api_base_url, "http://plain.example.com/api");
        // The untouched field still gets the computed secure default
        assert_eq!(config.ws_base_url, "wss://trading.local/ws");
    }

    #[test]
    fn test_garbage_override_passes_through() {
        let config = resolve_from(&env_with(&[("API_BASE_URL", "not a url at all")]));
        assert_eq!(config.api_base_url, "not a url at all");
    }

    #[test]
    fn test_empty_override_falls_back_to_default() {
        let config = resolve_from(&env_with(&[("API_BASE_URL", ""), ("WS_BASE_URL", "")]));

        assert_eq!(config.api_base_url, "http://trading.local/api");
        assert_eq!(config.ws_base_url, "ws://trading.local/ws");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let env = env_with(&[("TRADING_ENV", "production"), ("WS_BASE_URL", "wss://x.io/ws")]);

        let first = resolve_from(&env);
        let second = resolve_from(&env);
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolved_config_passes_validation() {
        for vars in [
            vec![],
            vec![("TRADING_ENV", "production")],
            vec![("SECURE_SOCKETS", "true"), ("API_BASE_URL", "garbage")],
        ] {
            let config = resolve_from(&env_with(&vars));
            assert!(config.validate().is_ok());
        }
    }
}
