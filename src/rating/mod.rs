//! ELO rating system for head-to-head league matches
//!
//! This module provides the pure rating update math, the calculator trait
//! used by the match workflow, and storage interfaces for player standings.

pub mod calculator;
pub mod elo;
pub mod storage;

// Re-export commonly used types
pub use calculator::{EloCalculator, RatingCalculator};
pub use elo::{compute_rating_update, expected_score, RatingUpdate};
pub use storage::{InMemoryRatingStorage, RatingEntry, RatingStorage};
