//! # Configuration
//!
//! Startup settings for the gateway.
//!
//! Settings are layered with the `config` crate, later sources overriding
//! earlier ones:
//!
//! 1. built-in defaults
//! 2. an optional TOML file (`config/default.toml` unless another path is given)
//! 3. environment variables prefixed `MOVIE_GATEWAY__`, with `__` between
//!    nesting levels, e.g. `MOVIE_GATEWAY__PROVIDERS__TOKEN`
//!
//! A `.env` file in the working directory is loaded into the environment
//! first.
//!
//! # Examples
//!
//! ```
//! use movie_gateway::config::AppConfig;
//!
//! let config = AppConfig::from_toml_str(r#"
//!     [providers]
//!     cinema_url = "https://movies.example.com/api/cinemaworld/"
//!     film_url = "https://movies.example.com/api/filmworld/"
//!     token = "secret"
//! "#).unwrap();
//!
//! assert_eq!(config.server.port, 8001);
//! assert_eq!(config.retry.max_retries, 3);
//! ```

use crate::infrastructure::providers::RetryPolicy;
use axum::http::HeaderValue;
use config::{Config, Environment, File, FileFormat};
use reqwest::Url;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "MOVIE_GATEWAY";

/// Separator between the prefix and nesting levels in variable names.
pub const ENV_SEPARATOR: &str = "__";

/// Config file read when no path is given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Sources could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value was read but is not usable.
    #[error("invalid configuration: {field}: {message}")]
    Invalid {
        /// Offending key.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },
}

impl ConfigError {
    /// Creates an invalid-value error.
    #[must_use]
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Complete gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP listener.
    #[serde(default)]
    pub server: ServerSettings,
    /// Upstream catalogs.
    pub providers: ProviderSettings,
    /// Outbound retry behavior.
    #[serde(default)]
    pub retry: RetrySettings,
    /// Listing cache.
    #[serde(default)]
    pub cache: CacheSettings,
    /// Log output.
    #[serde(default)]
    pub log: LogSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Browser origin allowed by CORS.
    #[serde(default)]
    pub cors_origin: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: None,
        }
    }
}

/// Upstream catalog settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    /// Cinema catalog base URL.
    pub cinema_url: String,
    /// Film catalog base URL.
    pub film_url: String,
    /// Access token sent to both catalogs.
    pub token: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Retry settings.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RetrySettings {
    /// Retries after the first attempt.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Backoff base in milliseconds.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
        }
    }
}

/// Listing cache settings.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CacheSettings {
    /// Time-to-live in seconds, `0` disables the cache.
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl_secs(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Log settings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LogSettings {
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8001
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    3
}

fn default_base_delay_ms() -> u64 {
    1000
}

fn default_cache_ttl_secs() -> u64 {
    300
}

impl AppConfig {
    /// Loads and validates configuration from `.env`, the config file and
    /// the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or a value is
    /// missing or invalid.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        if let Ok(dotenv) = dotenvy::dotenv() {
            tracing::debug!(path = %dotenv.display(), "loaded .env file");
        }

        let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), Path::to_path_buf);
        let config = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(environment())
            .build()?;

        Self::finish(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the text cannot be parsed or a value is
    /// missing or invalid.
    pub fn from_toml_str(toml: &str) -> ConfigResult<Self> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Self::finish(config)
    }

    fn finish(config: Config) -> ConfigResult<Self> {
        let app: Self = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending key.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_url("providers.cinema_url", &self.providers.cinema_url)?;
        validate_url("providers.film_url", &self.providers.film_url)?;
        if self.providers.token.trim().is_empty() {
            return Err(ConfigError::invalid("providers.token", "must not be empty"));
        }
        if self.providers.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "providers.timeout_secs",
                "must be greater than zero",
            ));
        }
        self.cors_origin()?;
        self.socket_addr()?;
        Ok(())
    }

    /// Returns the listener address.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if host and port do not form an
    /// address.
    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| ConfigError::invalid("server.host", format!("{e}")))
    }

    /// Returns the CORS origin as a header value, if configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the origin is not a valid header
    /// value.
    pub fn cors_origin(&self) -> ConfigResult<Option<HeaderValue>> {
        self.server
            .cors_origin
            .as_deref()
            .filter(|origin| !origin.trim().is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin.trim())
                    .map_err(|e| ConfigError::invalid("server.cors_origin", format!("{e}")))
            })
            .transpose()
    }

    /// Returns the per-request provider timeout.
    #[must_use]
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.providers.timeout_secs)
    }

    /// Returns the outbound retry policy.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry.max_retries,
            Duration::from_millis(self.retry.base_delay_ms),
        )
    }

    /// Returns the listing cache time-to-live.
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_secs)
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

fn validate_url(field: &'static str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::invalid(field, "must not be empty"));
    }
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::invalid(field, format!("{e}")))
}
