//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `VITRINE_AUTH_DELAY_MS` - Delay before a mock sign-in completes (default: 1000)
//! - `VITRINE_CURRENCY` - ISO 4217 code used to price the catalog (default: BRL)
//! - `VITRINE_LOG` - Default tracing filter when `RUST_LOG` is unset
//!   (default: `vitrine_storefront=info,vitrine_cli=info`)
//! - `VITRINE_LOG_FORMAT` - `text` or `json` (default: text)

use std::time::Duration;

use thiserror::Error;

use vitrine_core::CurrencyCode;

/// Upper bound for the sign-in delay.
const MAX_AUTH_DELAY_MS: u64 = 60_000;

const DEFAULT_AUTH_DELAY_MS: u64 = 1_000;
const DEFAULT_LOG_FILTER: &str = "vitrine_storefront=info,vitrine_cli=info";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// How long a mock sign-in takes to complete
    pub auth_delay: Duration,
    /// Currency the catalog is priced in
    pub currency: CurrencyCode,
    /// Default tracing filter directive
    pub log_filter: String,
    /// Emit structured JSON logs instead of text
    pub log_json: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            auth_delay: Duration::from_millis(DEFAULT_AUTH_DELAY_MS),
            currency: CurrencyCode::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_json: false,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let auth_delay = match lookup("VITRINE_AUTH_DELAY_MS") {
            Some(raw) => parse_delay(&raw)?,
            None => defaults.auth_delay,
        };
        let currency = match lookup("VITRINE_CURRENCY") {
            Some(raw) => raw.parse::<CurrencyCode>().map_err(|e| {
                ConfigError::InvalidEnvVar("VITRINE_CURRENCY".to_string(), e.to_string())
            })?,
            None => defaults.currency,
        };
        let log_filter = lookup("VITRINE_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);
        let log_json = match lookup("VITRINE_LOG_FORMAT") {
            Some(raw) => parse_log_format(&raw)?,
            None => defaults.log_json,
        };

        Ok(Self {
            auth_delay,
            currency,
            log_filter,
            log_json,
        })
    }
}

/// Parse the sign-in delay in milliseconds.
fn parse_delay(raw: &str) -> Result<Duration, ConfigError> {
    let millis = raw.trim().parse::<u64>().map_err(|e| {
        ConfigError::InvalidEnvVar("VITRINE_AUTH_DELAY_MS".to_string(), e.to_string())
    })?;
    if millis > MAX_AUTH_DELAY_MS {
        return Err(ConfigError::InvalidEnvVar(
            "VITRINE_AUTH_DELAY_MS".to_string(),
            format!("must be at most {MAX_AUTH_DELAY_MS} (got {millis})"),
        ));
    }
    Ok(Duration::from_millis(millis))
}

/// `true` for `json`, `false` for `text`.
fn parse_log_format(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "text" => Ok(false),
        "json" => Ok(true),
        other => Err(ConfigError::InvalidEnvVar(
            "VITRINE_LOG_FORMAT".to_string(),
            format!("expected `text` or `json` (got `{other}`)"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.auth_delay, Duration::from_secs(1));
        assert_eq!(config.currency, CurrencyCode::BRL);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("VITRINE_AUTH_DELAY_MS", "250"),
            ("VITRINE_CURRENCY", "usd"),
            ("VITRINE_LOG", "debug"),
            ("VITRINE_LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert!(config.log_json);
        assert_eq!(config.auth_delay, Duration::from_millis(250));
        assert_eq!(config.currency, CurrencyCode::USD);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_zero_delay_is_allowed() {
        let config = load(&[("VITRINE_AUTH_DELAY_MS", "0")]).unwrap();
        assert_eq!(config.auth_delay, Duration::ZERO);
    }

    #[test]
    fn test_invalid_delay() {
        let err = load(&[("VITRINE_AUTH_DELAY_MS", "soon")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref k, _) if k == "VITRINE_AUTH_DELAY_MS"));

        let err = load(&[("VITRINE_AUTH_DELAY_MS", "60001")]).unwrap_err();
        assert!(err.to_string().contains("at most 60000"));
    }

    #[test]
    fn test_invalid_currency() {
        let err = load(&[("VITRINE_CURRENCY", "XYZ")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref k, _) if k == "VITRINE_CURRENCY"));
    }

    #[test]
    fn test_invalid_log_format() {
        let err = load(&[("VITRINE_LOG_FORMAT", "xml")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref k, _) if k == "VITRINE_LOG_FORMAT"));
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        let config = load(&[("VITRINE_LOG", "  ")]).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
