//! Error types for the league engine
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the crate.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific league scenarios
#[derive(Debug, thiserror::Error)]
pub enum LeagueError {
    #[error("Invalid match report: {reason}")]
    InvalidMatchReport { reason: String },

    #[error("No match period is configured")]
    NoActivePeriod,

    #[error("Match quota exhausted for {player} in period {period_id}")]
    QuotaExhausted { player: String, period_id: String },

    #[error("Pending match not found: {match_id}")]
    MatchNotFound { match_id: String },

    #[error("Player {player_id} is not a participant in this match")]
    NotAParticipant { player_id: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Internal engine error: {message}")]
    InternalError { message: String },
}
