//! Main application configuration
//!
//! This module defines the primary configuration structures for tools
//! embedding the league engine, including environment variable loading
//! and validation.

use crate::config::rating::RatingConfig;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: RatingConfig,
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
            name: "league-engine".to_string(),
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

        // Rating settings
        if let Ok(k_factor) = env::var("ELO_K_FACTOR") {
            config.rating.k_factor = k_factor
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_K_FACTOR value: {}", k_factor))?;
        }
        if let Ok(default_rating) = env::var("DEFAULT_RATING") {
            config.rating.default_rating = default_rating
                .parse()
                .map_err(|_| anyhow!("Invalid DEFAULT_RATING value: {}", default_rating))?;
        }

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate a complete application configuration
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.service.log_level.as_str()) {
        return Err(anyhow!(
            "Invalid log level '{}', expected one of {:?}",
            config.service.log_level,
            valid_levels
        ));
    }

    config.rating.validate()?;

    Ok(())
}
