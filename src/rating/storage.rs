//! Player rating storage interface and implementations
//!
//! This module defines the interface for persisting player ratings and
//! win/loss tallies, with an in-memory implementation used by tests and
//! the demo binary. Production deployments back this with the league's
//! document store.

use crate::types::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// Storage entry for a player's rating and lifetime record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingEntry {
    pub player_id: PlayerId,
    pub rating: i64,
    pub wins: u64,
    pub losses: u64,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl RatingEntry {
    /// Create a new entry for a player seen for the first time
    pub fn new(player_id: PlayerId, initial_rating: i64) -> Self {
        let now = Utc::now();
        Self {
            player_id,
            rating: initial_rating,
            wins: 0,
            losses: 0,
            created_at: now,
            last_updated: now,
        }
    }

    /// Apply a rating delta and record the match outcome
    pub fn apply_update(&mut self, delta: i64, won: bool) {
        self.rating += delta;
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.last_updated = Utc::now();
    }
}

/// Trait for rating storage operations
pub trait RatingStorage: Send + Sync {
    /// Get a player's rating entry
    fn get_rating(&self, player_id: &PlayerId) -> crate::error::Result<Option<RatingEntry>>;

    /// Get a player's entry, creating one at the given initial rating if absent
    fn get_or_create(
        &self,
        player_id: &PlayerId,
        initial_rating: i64,
    ) -> crate::error::Result<RatingEntry>;

    /// Store or update a player's rating entry
    fn store_rating(&self, entry: RatingEntry) -> crate::error::Result<()>;

    /// Get ratings for multiple players
    fn get_ratings(
        &self,
        player_ids: &[PlayerId],
    ) -> crate::error::Result<HashMap<PlayerId, RatingEntry>>;

    /// Get all entries sorted by rating, highest first (the ladder view)
    fn leaderboard(&self, limit: Option<usize>) -> crate::error::Result<Vec<RatingEntry>>;

    /// Remove a player's rating
    fn remove_rating(&self, player_id: &PlayerId) -> crate::error::Result<bool>;

    /// Get total number of rated players
    fn player_count(&self) -> crate::error::Result<usize>;
}

/// In-memory rating storage implementation
#[derive(Debug, Default)]
pub struct InMemoryRatingStorage {
    ratings: RwLock<HashMap<PlayerId, RatingEntry>>,
}

impl InMemoryRatingStorage {
    /// Create a new empty in-memory rating storage
    pub fn new() -> Self {
        Self::default()
    }
}

impl RatingStorage for InMemoryRatingStorage {
    fn get_rating(&self, player_id: &PlayerId) -> crate::error::Result<Option<RatingEntry>> {
        let ratings = self
            .ratings
            .read()
            .map_err(|_| crate::error::LeagueError::InternalError {
                message: "Failed to acquire ratings read lock".to_string(),
            })?;

        Ok(ratings.get(player_id).cloned())
    }

    fn get_or_create(
        &self,
        player_id: &PlayerId,
        initial_rating: i64,
    ) -> crate::error::Result<RatingEntry> {
        let mut ratings =
            self.ratings
                .write()
                .map_err(|_| crate::error::LeagueError::InternalError {
                    message: "Failed to acquire ratings write lock".to_string(),
                })?;

        let entry = ratings
            .entry(player_id.clone())
            .or_insert_with(|| RatingEntry::new(player_id.clone(), initial_rating));

        Ok(entry.clone())
    }

    fn store_rating(&self, entry: RatingEntry) -> crate::error::Result<()> {
        let mut ratings =
            self.ratings
                .write()
                .map_err(|_| crate::error::LeagueError::InternalError {
                    message: "Failed to acquire ratings write lock".to_string(),
                })?;

        ratings.insert(entry.player_id.clone(), entry);
        Ok(())
    }

    fn get_ratings(
        &self,
        player_ids: &[PlayerId],
    ) -> crate::error::Result<HashMap<PlayerId, RatingEntry>> {
        let ratings = self
            .ratings
            .read()
            .map_err(|_| crate::error::LeagueError::InternalError {
                message: "Failed to acquire ratings read lock".to_string(),
            })?;

        let mut result = HashMap::new();
        for player_id in player_ids {
            if let Some(entry) = ratings.get(player_id) {
                result.insert(player_id.clone(), entry.clone());
            }
        }

        Ok(result)
    }

    fn leaderboard(&self, limit: Option<usize>) -> crate::error::Result<Vec<RatingEntry>> {
        let ratings = self
            .ratings
            .read()
            .map_err(|_| crate::error::LeagueError::InternalError {
                message: "Failed to acquire ratings read lock".to_string(),
            })?;

        let mut entries: Vec<RatingEntry> = ratings.values().cloned().collect();
        entries.sort_by(|a, b| b.rating.cmp(&a.rating));

        if let Some(limit) = limit {
            entries.truncate(limit);
        }

        Ok(entries)
    }

    fn remove_rating(&self, player_id: &PlayerId) -> crate::error::Result<bool> {
        let mut ratings =
            self.ratings
                .write()
                .map_err(|_| crate::error::LeagueError::InternalError {
                    message: "Failed to acquire ratings write lock".to_string(),
                })?;

        Ok(ratings.remove(player_id).is_some())
    }

    fn player_count(&self) -> crate::error::Result<usize> {
        let ratings = self
            .ratings
            .read()
            .map_err(|_| crate::error::LeagueError::InternalError {
                message: "Failed to acquire ratings read lock".to_string(),
            })?;

        Ok(ratings.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(player_id: &str, rating: i64) -> RatingEntry {
        RatingEntry::new(player_id.to_string(), rating)
    }

    #[test]
    fn test_rating_entry_update() {
        let mut e = entry("ann@example.com", 1000);
        let before = e.last_updated;

        e.apply_update(16, true);
        assert_eq!(e.rating, 1016);
        assert_eq!(e.wins, 1);
        assert_eq!(e.losses, 0);
        assert!(e.last_updated >= before);

        e.apply_update(-24, false);
        assert_eq!(e.rating, 992);
        assert_eq!(e.losses, 1);
    }

    #[test]
    fn test_get_or_create_uses_initial_rating_once() {
        let storage = InMemoryRatingStorage::new();
        let ann = "ann@example.com".to_string();

        let created = storage.get_or_create(&ann, 1000).unwrap();
        assert_eq!(created.rating, 1000);

        let mut updated = created;
        updated.apply_update(16, true);
        storage.store_rating(updated).unwrap();

        // A second get_or_create must not reset the rating
        let fetched = storage.get_or_create(&ann, 1000).unwrap();
        assert_eq!(fetched.rating, 1016);
    }

    #[test]
    fn test_leaderboard_is_sorted_descending() {
        let storage = InMemoryRatingStorage::new();
        storage.store_rating(entry("ann@example.com", 1100)).unwrap();
        storage.store_rating(entry("bob@example.com", 1250)).unwrap();
        storage.store_rating(entry("cho@example.com", 950)).unwrap();

        let ladder = storage.leaderboard(None).unwrap();
        assert_eq!(ladder.len(), 3);
        assert_eq!(ladder[0].player_id, "bob@example.com");
        assert_eq!(ladder[2].player_id, "cho@example.com");

        let top_two = storage.leaderboard(Some(2)).unwrap();
        assert_eq!(top_two.len(), 2);
    }

    #[test]
    fn test_remove_rating() {
        let storage = InMemoryRatingStorage::new();
        storage.store_rating(entry("ann@example.com", 1000)).unwrap();

        assert!(storage.remove_rating(&"ann@example.com".to_string()).unwrap());
        assert!(!storage.remove_rating(&"ann@example.com".to_string()).unwrap());
        assert_eq!(storage.player_count().unwrap(), 0);
    }

    #[test]
    fn test_bulk_get() {
        let storage = InMemoryRatingStorage::new();
        storage.store_rating(entry("ann@example.com", 1000)).unwrap();
        storage.store_rating(entry("bob@example.com", 1050)).unwrap();

        let ids = vec![
            "ann@example.com".to_string(),
            "bob@example.com".to_string(),
            "missing@example.com".to_string(),
        ];
        let found = storage.get_ratings(&ids).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.contains_key("ann@example.com"));
        assert!(!found.contains_key("missing@example.com"));
    }
}
