//! Server configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for the game page server.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    host: String,

    /// Port to bind to.
    #[serde(default = "default_port")]
    port: u16,

    /// Form field name the board cells are posted under.
    #[serde(default = "default_field_name")]
    field_name: String,

    /// Page title.
    #[serde(default = "default_title")]
    title: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_field_name() -> String {
    "game".to_string()
}

fn default_title() -> String {
    "Tic-Tac-Toe".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            field_name: default_field_name(),
            title: default_title(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(host = %config.host, port = config.port, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.field_name.is_empty() {
            return Err(ConfigError::new("field_name must not be empty".to_string()));
        }
        Ok(config)
    }

    /// Returns a copy bound to `host`.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Returns a copy bound to `port`.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ServerConfig::from_toml("").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.field_name(), "game");
        assert_eq!(*config.port(), 3000);
    }

    #[test]
    fn test_partial_toml() {
        let config = ServerConfig::from_toml("port = 8080\ntitle = \"Noughts\"").unwrap();
        assert_eq!(*config.port(), 8080);
        assert_eq!(config.title(), "Noughts");
        assert_eq!(config.host(), "127.0.0.1");
    }

    #[test]
    fn test_rejects_empty_field_name() {
        let err = ServerConfig::from_toml("field_name = \"\"").unwrap_err();
        assert!(err.message.contains("field_name"));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = ServerConfig::from_toml("port = \"not a number\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::default().with_host("0.0.0.0").with_port(9000);
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(*config.port(), 9000);
    }
}
