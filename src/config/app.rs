//! Main application configuration
//!
//! This module defines the primary configuration structures for the
//! guess-center coordinator, including environment variable loading and
//! validation.

use crate::config::game::GameSettings;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub game: GameSettings,
}

/// Service-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "guess-center".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Game settings
        if let Ok(upper_bound) = env::var("GUESS_UPPER_BOUND") {
            config.game.upper_bound = upper_bound
                .parse()
                .map_err(|_| anyhow!("Invalid GUESS_UPPER_BOUND value: {}", upper_bound))?;
        }
        if let Ok(max_guesses) = env::var("MAX_GUESSES") {
            config.game.max_guesses = max_guesses
                .parse()
                .map_err(|_| anyhow!("Invalid MAX_GUESSES value: {}", max_guesses))?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate game settings
    if config.game.upper_bound < 2 {
        return Err(anyhow!("Guess upper bound must be at least 2"));
    }
    if config.game.max_guesses == 0 {
        return Err(anyhow!("Max guesses must be greater than 0"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.game.upper_bound, 10);
        assert_eq!(config.game.max_guesses, 3);
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let mut config = AppConfig::default();
        config.service.log_level = "verbose".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_degenerate_game_settings() {
        let mut config = AppConfig::default();
        config.game.upper_bound = 1;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.game.max_guesses = 0;
        assert!(validate_config(&config).is_err());
    }
}
