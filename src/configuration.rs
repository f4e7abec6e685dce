use std::ops::RangeInclusive;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

pub const ENVIRONMENT_PREFIX: &str = "FORGETMENOTS";

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String }
}

/// Application settings.
///
/// Later sources override earlier ones:
/// 1. `config/default.toml`
/// 2. `config/{FORGETMENOTS_ENV}.toml` (`development` when unset)
/// 3. `FORGETMENOTS__SECTION__KEY` environment variables
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub credentials: CredentialSettings,
    #[serde(default)]
    pub log: LogSettings
}

impl Settings {
    pub fn load() -> Result<Settings, ConfigurationError> {
        let env = std::env::var(format!("{ENVIRONMENT_PREFIX}_ENV"))
            .unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                Environment::with_prefix(ENVIRONMENT_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.cache.prime_years_before > MAX_PRIME_YEARS
            || self.cache.prime_years_after > MAX_PRIME_YEARS
        {
            return Err(ConfigurationError::InvalidValue {
                key: "cache.prime_years_*".to_owned(),
                message: format!("at most {MAX_PRIME_YEARS} years may be primed on either side"),
            });
        }
        if self.server.address.trim().is_empty() {
            return Err(ConfigurationError::InvalidValue {
                key: "server.address".to_owned(),
                message: "must not be empty".to_owned(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_address")]
    pub address: String
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { address: default_address() }
    }
}

fn default_address() -> String {
    "0.0.0.0:8000".to_string()
}

const MAX_PRIME_YEARS: u16 = 50;

/// Years materialized when a country's calendar is first cached,
/// counted around the year the calendar is built in.
#[derive(Debug, Deserialize, Clone)]
pub struct CacheSettings {
    #[serde(default = "default_prime_years")]
    pub prime_years_before: u16,
    #[serde(default = "default_prime_years")]
    pub prime_years_after: u16
}

impl CacheSettings {
    pub fn prime_years(&self, current_year: i32) -> RangeInclusive<i32> {
        let first = current_year - self.prime_years_before as i32;
        let last = current_year + self.prime_years_after as i32;
        first..=last
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            prime_years_before: default_prime_years(),
            prime_years_after: default_prime_years()
        }
    }
}

fn default_prime_years() -> u16 {
    1
}

/// Where identity-provider credentials are read from: the file if it
/// exists, otherwise the environment variable holding the same JSON.
#[derive(Debug, Deserialize, Clone)]
pub struct CredentialSettings {
    #[serde(default = "default_credentials_path")]
    pub path: String,
    #[serde(default = "default_credentials_environment_key")]
    pub environment_key: String
}

impl Default for CredentialSettings {
    fn default() -> Self {
        Self {
            path: default_credentials_path(),
            environment_key: default_credentials_environment_key()
        }
    }
}

fn default_credentials_path() -> String {
    "config/credentials.json".to_string()
}

fn default_credentials_environment_key() -> String {
    "SECRET_IDENTITY_CREDENTIALS".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins when set.
    #[serde(default = "default_log_filter")]
    pub filter: String
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { filter: default_log_filter() }
    }
}

fn default_log_filter() -> String {
    "info,tower_http=debug".to_string()
}
