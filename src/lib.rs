//! League Engine - rating and match-accounting core for a local card-game league
//!
//! This crate provides the logic behind a community league app: ELO rating
//! updates, recurring weekly match-period resolution, per-period match
//! quotas, and the two-party match approval workflow that ties them together.

pub mod config;
pub mod error;
pub mod quota;
pub mod rating;
pub mod schedule;
pub mod types;
pub mod utils;
pub mod workflow;

// Re-export commonly used types and traits
pub use error::{LeagueError, Result};
pub use types::*;

// Re-export key components
pub use quota::{MatchAccountant, MatchRecordStore};
pub use rating::{compute_rating_update, EloCalculator, RatingCalculator, RatingStorage};
pub use schedule::{current_period, format_period_time, Period, PeriodProvider};
pub use workflow::MatchWorkflow;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
