use std::time::Duration;

use thiserror::Error;

pub const API_KEY_VAR: &str = "ALPHA_VANTAGE_API_KEY";
pub const PORT_VAR: &str = "PORT";
pub const API_URL_VAR: &str = "ALPHA_VANTAGE_API_URL";
pub const TIMEOUT_VAR: &str = "UPSTREAM_TIMEOUT_SECS";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "https://www.alphavantage.co/query";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not defined in the environment variables")]
    Missing(&'static str),

    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Access key sent as `apikey` on every upstream call.
    ///
    /// Read-only after startup. Never logged.
    pub api_key: String,

    /// Port the HTTP server listens on (all interfaces).
    pub port: u16,

    // =========================
    // Upstream configuration
    // =========================
    /// Query endpoint of the quote provider.
    ///
    /// Overridable so the relay can be pointed at a stub provider.
    pub api_url: String,

    /// Upper bound on a single upstream call.
    ///
    /// A provider that never answers would otherwise hold the inbound
    /// request open forever. Expiry is reported like any other upstream
    /// failure.
    pub upstream_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset and empty
    /// values are treated the same.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let api_key = get(API_KEY_VAR).ok_or(ConfigError::Missing(API_KEY_VAR))?;

        let port = match get(PORT_VAR) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: PORT_VAR,
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let api_url = get(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match get(TIMEOUT_VAR) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: TIMEOUT_VAR,
                        value: raw,
                    });
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            port,
            api_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
