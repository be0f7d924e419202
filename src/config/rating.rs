//! Rating system configuration

use serde::{Deserialize, Serialize};

/// ELO rating configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingConfig {
    /// Sensitivity constant for rating updates
    pub k_factor: f64,
    /// Rating assigned to players on first contact
    pub default_rating: i64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            k_factor: 32.0,
            default_rating: 1000,
        }
    }
}

impl RatingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.k_factor <= 0.0 {
            return Err(crate::error::LeagueError::ConfigurationError {
                message: "K factor must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
