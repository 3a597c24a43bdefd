//! Server configuration.

use config::{Config, Environment, File};
use cuentista_error::{ConfigError, CuentistaResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Cuentista server.
///
/// Loaded from an optional `cuentista.toml` in the working directory, with
/// environment overrides under the `CUENTISTA_` prefix (e.g.
/// `CUENTISTA_PORT=8080`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Number of generation workers
    pub workers: usize,
    /// Capacity of the generation queue
    pub queue_capacity: usize,
    /// Deadline for a single generation execution, in seconds
    pub generation_timeout_secs: u64,
    /// Text model override for the provider client
    #[serde(default)]
    pub text_model: Option<String>,
    /// Image model override for the provider client
    #[serde(default)]
    pub image_model: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: 4,
            queue_capacity: 64,
            generation_timeout_secs: 120,
            text_model: None,
            image_model: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or environment values cannot be parsed
    /// into the expected shape.
    pub fn load() -> CuentistaResult<Self> {
        let defaults = Self::default();

        let config = Config::builder()
            .set_default("host", defaults.host.clone())
            .and_then(|b| b.set_default("port", i64::from(defaults.port)))
            .and_then(|b| b.set_default("workers", defaults.workers as i64))
            .and_then(|b| b.set_default("queue_capacity", defaults.queue_capacity as i64))
            .and_then(|b| {
                b.set_default(
                    "generation_timeout_secs",
                    defaults.generation_timeout_secs as i64,
                )
            })
            .map_err(|e| ConfigError::new(e.to_string()))?
            .add_source(File::with_name("cuentista").required(false))
            .add_source(Environment::with_prefix("CUENTISTA"))
            .build()
            .map_err(|e| ConfigError::new(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::new(e.to_string()).into())
    }

    /// The socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Deadline for a single generation execution.
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.generation_timeout(), Duration::from_secs(120));
        assert!(config.workers > 0);
        assert!(config.queue_capacity > 0);
    }
}
