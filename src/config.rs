//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::error::{AppError, Result};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Address to bind the HTTP server to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Store ===
    /// Start with the sample catalog instead of an empty store.
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,

    // === Observability ===
    /// Install the Prometheus recorder and expose `/metrics`.
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed_sample_data: true,
            metrics_enabled: true,
            rust_log: default_log_level(),
            log_format: LogFormat::default(),
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(AppError::InvalidConfig(format!(
                "HOST must be an IP address, got {:?}",
                self.host
            )));
        }

        if self.port == 0 {
            return Err(AppError::InvalidConfig("PORT must not be 0".to_string()));
        }

        Ok(())
    }

    /// Socket address to bind, with an optional port override.
    pub fn socket_addr(&self, port_override: Option<u16>) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| AppError::InvalidConfig(format!("invalid HOST {:?}", self.host)))?;
        Ok(SocketAddr::new(ip, port_override.unwrap_or(self.port)))
    }
}
