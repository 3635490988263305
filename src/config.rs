//! Configuration management for Jewel
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{JewelError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Jewel
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Gemini model settings
    #[serde(default)]
    pub model: ModelConfig,
    /// Session cookie settings
    #[serde(default)]
    pub session: SessionConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Gemini API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// API base URL; tests point this at a mock server
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Model to use for all requests
    #[serde(default = "default_model")]
    pub model: String,

    /// API key, normally supplied through `GEMINI_API_KEY`
    #[serde(default)]
    pub api_key: Option<String>,

    /// HTTP client timeout for model calls (seconds)
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-flash-lite-latest".to_string()
}

fn default_timeout() -> u64 {
    120
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
            api_key: None,
            timeout_seconds: default_timeout(),
        }
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Secret used to sign session cookies, normally from `JEWEL_SECRET_KEY`
    ///
    /// When unset a random key is generated per process, so sessions do not
    /// survive a restart.
    #[serde(default)]
    pub secret_key: Option<String>,

    /// Name of the session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

fn default_cookie_name() -> String {
    "jewel_session".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret_key: None,
            cookie_name: default_cookie_name(),
        }
    }
}

/// Minimum accepted length of a configured session secret (bytes)
pub const MIN_SECRET_LEN: usize = 16;

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| JewelError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| JewelError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        // Secrets
        if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
            if !api_key.is_empty() {
                self.model.api_key = Some(api_key);
            }
        }

        if let Ok(secret) = std::env::var("JEWEL_SECRET_KEY") {
            if !secret.is_empty() {
                self.session.secret_key = Some(secret);
            }
        }

        // Model overrides
        if let Ok(model) = std::env::var("JEWEL_MODEL") {
            tracing::debug!(model = %model, "Env override: JEWEL_MODEL");
            self.model.model = model;
        }

        if let Ok(api_base) = std::env::var("JEWEL_API_BASE") {
            tracing::debug!(api_base = %api_base, "Env override: JEWEL_API_BASE");
            self.model.api_base = api_base;
        }

        if let Ok(timeout) = std::env::var("JEWEL_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.model.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid JEWEL_TIMEOUT_SECONDS: {}", timeout);
            }
        }

        // Server overrides
        if let Ok(host) = std::env::var("JEWEL_HOST") {
            tracing::debug!(host = %host, "Env override: JEWEL_HOST");
            self.server.host = host;
        }

        if let Ok(port) = std::env::var("JEWEL_PORT") {
            if let Ok(value) = port.parse() {
                self.server.port = value;
            } else {
                tracing::warn!("Invalid JEWEL_PORT: {}", port);
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        if let crate::cli::Commands::Serve { host, port } = &cli.command {
            if let Some(host) = host {
                self.server.host = host.clone();
            }
            if let Some(port) = port {
                self.server.port = *port;
            }
        }
    }

    /// Validate the configuration
    ///
    /// A missing API key is not an error: the server still starts and model
    /// calls report the problem as an upstream failure.
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.model.model.trim().is_empty() {
            return Err(JewelError::Config("model.model cannot be empty".to_string()).into());
        }

        url::Url::parse(&self.model.api_base).map_err(|e| {
            JewelError::Config(format!(
                "model.api_base is not a valid URL ({}): {}",
                self.model.api_base, e
            ))
        })?;

        if self.model.timeout_seconds == 0 {
            return Err(JewelError::Config(
                "model.timeout_seconds must be greater than 0".to_string(),
            )
            .into());
        }

        if self.server.port == 0 {
            return Err(
                JewelError::Config("server.port must be greater than 0".to_string()).into(),
            );
        }

        if self.session.cookie_name.trim().is_empty() {
            return Err(
                JewelError::Config("session.cookie_name cannot be empty".to_string()).into(),
            );
        }

        if let Some(secret) = &self.session.secret_key {
            if secret.len() < MIN_SECRET_LEN {
                return Err(JewelError::Config(format!(
                    "session.secret_key must be at least {} bytes",
                    MIN_SECRET_LEN
                ))
                .into());
            }
        }

        if self.model.api_key.is_none() {
            tracing::warn!("No Gemini API key configured; model calls will fail until GEMINI_API_KEY is set");
        }

        Ok(())
    }
}
