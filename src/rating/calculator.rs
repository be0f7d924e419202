//! Rating calculator trait and implementations
//!
//! This module defines the interface the match workflow uses for rating
//! calculations, so the concrete rating system stays swappable.

use crate::config::RatingConfig;
use crate::rating::elo::{compute_rating_update_with_k, RatingUpdate};
use crate::types::MatchScore;

/// Trait for calculating rating changes after a head-to-head match
pub trait RatingCalculator: Send + Sync {
    /// Calculate the rating update for both sides of a finished match
    ///
    /// # Arguments
    /// * `rating_one` / `rating_two` - current ratings of the two sides
    /// * `score` - final game score; trusted as supplied
    fn rate(&self, rating_one: i64, rating_two: i64, score: &MatchScore) -> RatingUpdate;

    /// Rating assigned to players seen for the first time
    fn initial_rating(&self) -> i64;
}

/// ELO calculator over the league's rating configuration
#[derive(Debug, Clone)]
pub struct EloCalculator {
    config: RatingConfig,
}

impl EloCalculator {
    /// Create a new calculator from a validated configuration
    pub fn new(config: RatingConfig) -> crate::error::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn k_factor(&self) -> f64 {
        self.config.k_factor
    }
}

impl Default for EloCalculator {
    fn default() -> Self {
        Self {
            config: RatingConfig::default(),
        }
    }
}

impl RatingCalculator for EloCalculator {
    fn rate(&self, rating_one: i64, rating_two: i64, score: &MatchScore) -> RatingUpdate {
        compute_rating_update_with_k(
            rating_one,
            rating_two,
            score.wins_one,
            score.wins_two,
            self.config.k_factor,
        )
    }

    fn initial_rating(&self) -> i64 {
        self.config.default_rating
    }
}
