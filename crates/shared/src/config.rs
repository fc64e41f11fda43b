//! Service configuration management.
//!
//! Both services load their settings the same way: optional config files
//! under `config/`, then environment variables with a per-service prefix and
//! `__` as the nesting separator.

use std::time::Duration;

use serde::Deserialize;

/// Environment variable that overrides the exchange rate service base URL.
///
/// Kept alongside the prefixed form so existing deployments can rewire the
/// currency service without renaming variables.
pub const EXCHANGE_RATE_URL_ENV: &str = "EXCHANGE_RATE_URL";

/// Currencies advertised by `/currencies` when nothing else is configured.
pub const DEFAULT_SUPPORTED_CURRENCIES: [&str; 5] = ["USD", "EUR", "INR", "JPY", "GBP"];

/// Currency (front) service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyServiceConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Where and how to reach the exchange rate service.
    #[serde(default)]
    pub rate_service: RateServiceClientConfig,
    /// Currency codes listed by `/currencies`.
    ///
    /// Maintained independently of the rate table, so it may name currencies
    /// that have no rate coverage.
    #[serde(default = "default_supported_currencies")]
    pub supported_currencies: Vec<String>,
}

/// Exchange rate service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRateServiceConfig {
    /// Server configuration.
    pub server: ServerConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl ServerConfig {
    /// Returns the `host:port` string to bind the listener to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Outbound client configuration for the exchange rate service.
#[derive(Debug, Clone, Deserialize)]
pub struct RateServiceClientConfig {
    /// Base URL of the exchange rate service, without trailing path.
    #[serde(default = "default_rate_service_url")]
    pub base_url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl RateServiceClientConfig {
    /// Returns the request timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for RateServiceClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_rate_service_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_rate_service_url() -> String {
    "http://exchange-rate-service:5001".to_string()
}

fn default_timeout_ms() -> u64 {
    2000 // 2 seconds
}

fn default_supported_currencies() -> Vec<String> {
    DEFAULT_SUPPORTED_CURRENCIES
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Builds the layered sources shared by both services.
fn layered(
    service: &str,
    env_prefix: &str,
    default_port: u16,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

    let builder = config::Config::builder()
        .set_default("server.host", default_host())?
        .set_default("server.port", i64::from(default_port))?
        .add_source(config::File::with_name(&format!("config/{service}")).required(false))
        .add_source(
            config::File::with_name(&format!("config/{service}-{run_mode}")).required(false),
        )
        .add_source(
            config::Environment::with_prefix(env_prefix)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("supported_currencies")
                .try_parsing(true),
        );

    Ok(builder)
}

impl CurrencyServiceConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = layered("currency-service", "CURRENCY_SERVICE", 5000)?
            .set_override_option(
                "rate_service.base_url",
                std::env::var(EXCHANGE_RATE_URL_ENV).ok(),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl ExchangeRateServiceConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = layered("exchange-rate-service", "EXCHANGE_RATE_SERVICE", 5001)?.build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
