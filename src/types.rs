//! Common types used throughout the league engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for players (the account email in the league app)
pub type PlayerId = String;

/// Opaque identifier for match periods
pub type PeriodId = String;

/// Opaque identifier for match records (pending and approved)
pub type MatchId = Uuid;

/// Which side of a match record a player occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl std::fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerSlot::One => write!(f, "player1"),
            PlayerSlot::Two => write!(f, "player2"),
        }
    }
}

/// Best-of-three game score for a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub wins_one: u32,
    pub wins_two: u32,
}

impl MatchScore {
    pub fn new(wins_one: u32, wins_two: u32) -> Self {
        Self { wins_one, wins_two }
    }

    /// Slot of the winning side, if the score has a strict winner
    pub fn winner(&self) -> Option<PlayerSlot> {
        match self.wins_one.cmp(&self.wins_two) {
            std::cmp::Ordering::Greater => Some(PlayerSlot::One),
            std::cmp::Ordering::Less => Some(PlayerSlot::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// A reportable best-of-three score: exactly one side reached 2 wins
    /// and the other has at most 1.
    pub fn is_valid_best_of_three(&self) -> bool {
        (self.wins_one == 2 && self.wins_two <= 1)
            || (self.wins_two == 2 && self.wins_one <= 1)
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.wins_one, self.wins_two)
    }
}

/// A match submitted by one player, awaiting the opponent's approval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingMatch {
    pub id: MatchId,
    pub period_id: PeriodId,
    pub player_one: PlayerId,
    pub player_two: PlayerId,
    /// Deck each side played with (free-form names from the deck list)
    pub deck_one: String,
    pub deck_two: String,
    pub score: MatchScore,
    pub p1_approval: bool,
    pub p2_approval: bool,
    pub time_created: DateTime<Utc>,
}

impl PendingMatch {
    /// Slot the given player occupies in this match, if any
    pub fn slot_of(&self, player: &PlayerId) -> Option<PlayerSlot> {
        if &self.player_one == player {
            Some(PlayerSlot::One)
        } else if &self.player_two == player {
            Some(PlayerSlot::Two)
        } else {
            None
        }
    }
}

/// An approved match, tagged with the period that was active at approval time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub period_id: PeriodId,
    pub player_one: PlayerId,
    pub player_two: PlayerId,
    pub deck_one: String,
    pub deck_two: String,
    pub score: MatchScore,
    pub elo_change_one: i64,
    pub elo_change_two: i64,
    pub time_created: DateTime<Utc>,
}

/// Quota usage for one player in one period. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCount {
    pub player: PlayerId,
    pub period_id: PeriodId,
    pub period_limit: u32,
    pub matches_logged: u32,
    pub matches_remaining: u32,
}

impl MatchCount {
    /// Build a count from a raw logged total, clamping remaining at zero
    /// so anomalous over-quota data never yields a negative quota.
    pub fn from_logged(
        player: PlayerId,
        period_id: PeriodId,
        period_limit: u32,
        matches_logged: u32,
    ) -> Self {
        Self {
            player,
            period_id,
            period_limit,
            matches_logged,
            matches_remaining: period_limit.saturating_sub(matches_logged),
        }
    }
}

/// A match report as entered by the submitting player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// The submitting player (occupies slot one)
    pub player_one: PlayerId,
    pub player_two: PlayerId,
    pub deck_one: String,
    pub deck_two: String,
    pub score: MatchScore,
}
