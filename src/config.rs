//! Service configuration, loaded from environment variables.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_PREDICTOR_URL: &str = "http://localhost:5000/predict";
pub const DEFAULT_PREDICTOR_TIMEOUT: Duration = Duration::from_secs(2);
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_ACTOR_BUFFER_SIZE: usize = 32;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address {value:?}: {reason}")]
    InvalidBindAddr { value: String, reason: String },
}

/// Runtime settings for the record service.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub predictor_url: String,
    pub predictor_timeout: Duration,
    pub bind_addr: SocketAddr,
    pub actor_buffer_size: usize,
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `ML_SERVICE_URL` | `http://localhost:5000/predict` |
    /// | `ML_SERVICE_TIMEOUT_MS` | `2000` |
    /// | `RECORD_SERVICE_ADDR` | `0.0.0.0:8000` |
    /// | `ACTOR_BUFFER_SIZE` | `32` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let predictor_url = lookup("ML_SERVICE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PREDICTOR_URL.to_string());

        let predictor_timeout = lookup("ML_SERVICE_TIMEOUT_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .map_or(DEFAULT_PREDICTOR_TIMEOUT, Duration::from_millis);

        let raw_addr = lookup("RECORD_SERVICE_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        // mpsc::channel panics on a zero capacity
        let actor_buffer_size = lookup("ACTOR_BUFFER_SIZE")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_ACTOR_BUFFER_SIZE);

        Ok(Self {
            predictor_url,
            predictor_timeout,
            bind_addr,
            actor_buffer_size,
        })
    }
}
