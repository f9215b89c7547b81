//! Server configuration module.
//!
//! Handles loading configuration from environment variables with sensible defaults.

use anyhow::{Context, Result};
use shared::config::{ValidationOptions, DEFAULT_CLOCK_SKEW_TOLERANCE_SECS};
use std::net::SocketAddr;
use validator::Validate;

/// Default request body limit (4 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/// Server configuration.
///
/// Configuration values can be set via environment variables:
/// - `OTLPCHECK_HOST`: The host address to bind to (default: "0.0.0.0")
/// - `OTLPCHECK_PORT`: The port to listen on (default: 8080)
/// - `OTLPCHECK_MAX_BODY_BYTES`: Largest accepted request body (default: 4 MiB)
/// - `OTLPCHECK_CLOCK_SKEW_SECS`: Tolerance for future span start times (default: 60)
#[derive(Debug, Clone, Validate)]
pub struct Config {
    /// The host address to bind to.
    pub host: String,
    /// The port to listen on.
    pub port: u16,
    /// Largest accepted request body in bytes.
    #[validate(range(
        min = 1024,
        max = 67108864,
        message = "Body limit must be between 1 KiB and 64 MiB"
    ))]
    pub max_body_bytes: usize,
    /// Options passed to the validation engine.
    #[validate(nested)]
    pub validation: ValidationOptions,
}

impl Config {
    /// Creates a new configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A numeric variable is set but cannot be parsed
    /// - A value is outside its allowed range
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates a configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("OTLPCHECK_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("OTLPCHECK_PORT")
            .map(|p| p.parse::<u16>())
            .transpose()
            .context("OTLPCHECK_PORT must be a valid port number")?
            .unwrap_or(8080);

        let max_body_bytes = lookup("OTLPCHECK_MAX_BODY_BYTES")
            .map(|b| b.parse::<usize>())
            .transpose()
            .context("OTLPCHECK_MAX_BODY_BYTES must be a number of bytes")?
            .unwrap_or(DEFAULT_MAX_BODY_BYTES);

        let clock_skew_secs = lookup("OTLPCHECK_CLOCK_SKEW_SECS")
            .map(|s| s.parse::<u64>())
            .transpose()
            .context("OTLPCHECK_CLOCK_SKEW_SECS must be a number of seconds")?
            .unwrap_or(DEFAULT_CLOCK_SKEW_TOLERANCE_SECS);

        let config = Self {
            host,
            port,
            max_body_bytes,
            validation: ValidationOptions::new(clock_skew_secs),
        };
        config.validate().context("Invalid server configuration")?;
        Ok(config)
    }

    /// Returns the socket address for binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the host and port combination is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid socket address {}:{}", self.host, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            validation: ValidationOptions::default(),
        }
    }
}
