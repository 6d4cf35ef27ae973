//! Configuration loading for the desk server
//!
//! A single JSON file covers:
//! - Server bind address
//! - NOP warning threshold
//! - Session table settings (London close, default viewer zone)
//!
//! Every field has a default, so `{}` is a valid configuration.

use desk_exposure::{DEFAULT_HIGH_NOP_THRESHOLD, NopCalculator};
use desk_sessions::{LondonClose, resolve_zone};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub exposure: ExposureConfig,

    #[serde(default)]
    pub sessions: SessionsConfig,
}

/// Server bind settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// NOP settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExposureConfig {
    /// |NOP| at which a product is flagged
    #[serde(default = "default_high_nop_threshold")]
    pub high_nop_threshold: Decimal,
}

fn default_high_nop_threshold() -> Decimal {
    DEFAULT_HIGH_NOP_THRESHOLD
}

impl Default for ExposureConfig {
    fn default() -> Self {
        Self {
            high_nop_threshold: default_high_nop_threshold(),
        }
    }
}

/// Session table settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsConfig {
    #[serde(default)]
    pub london_close: LondonClose,
    /// Zone for the "your time" column when the request names none
    #[serde(default = "default_viewer_zone")]
    pub viewer_zone: String,
}

fn default_viewer_zone() -> String {
    "UTC".to_string()
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            london_close: LondonClose::default(),
            viewer_zone: default_viewer_zone(),
        }
    }
}

impl DeskConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with `HOST` / `PORT` environment overrides
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(port) => config.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT '{}'", port),
            }
        }
        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        NopCalculator::with_threshold(self.exposure.high_nop_threshold)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        resolve_zone(&self.sessions.viewer_zone).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
