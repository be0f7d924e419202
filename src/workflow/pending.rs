//! Pending match store interface and implementations

use crate::types::{MatchId, PendingMatch, PlayerId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Trait for storing matches awaiting opponent approval
#[async_trait]
pub trait PendingMatchStore: Send + Sync {
    /// Store a newly submitted match
    async fn insert(&self, pending: PendingMatch) -> crate::error::Result<()>;

    /// Fetch a pending match by id
    async fn get(&self, match_id: &MatchId) -> crate::error::Result<Option<PendingMatch>>;

    /// Replace a pending match (amendments)
    async fn update(&self, pending: PendingMatch) -> crate::error::Result<()>;

    /// Delete a pending match; returns whether anything was removed
    async fn delete(&self, match_id: &MatchId) -> crate::error::Result<bool>;

    /// All pending matches a player participates in
    async fn pending_for_player(
        &self,
        player: &PlayerId,
    ) -> crate::error::Result<Vec<PendingMatch>>;
}

/// In-memory pending match store implementation
#[derive(Debug, Default)]
pub struct InMemoryPendingMatchStore {
    matches: RwLock<HashMap<MatchId, PendingMatch>>,
}

impl InMemoryPendingMatchStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PendingMatchStore for InMemoryPendingMatchStore {
    async fn insert(&self, pending: PendingMatch) -> crate::error::Result<()> {
        let mut matches =
            self.matches
                .write()
                .map_err(|_| crate::error::LeagueError::InternalError {
                    message: "Failed to acquire pending matches write lock".to_string(),
                })?;

        matches.insert(pending.id, pending);
        Ok(())
    }

    async fn get(&self, match_id: &MatchId) -> crate::error::Result<Option<PendingMatch>> {
        let matches = self
            .matches
            .read()
            .map_err(|_| crate::error::LeagueError::InternalError {
                message: "Failed to acquire pending matches read lock".to_string(),
            })?;

        Ok(matches.get(match_id).cloned())
    }

    async fn update(&self, pending: PendingMatch) -> crate::error::Result<()> {
        let mut matches =
            self.matches
                .write()
                .map_err(|_| crate::error::LeagueError::InternalError {
                    message: "Failed to acquire pending matches write lock".to_string(),
                })?;

        if !matches.contains_key(&pending.id) {
            return Err(crate::error::LeagueError::MatchNotFound {
                match_id: pending.id.to_string(),
            }
            .into());
        }

        matches.insert(pending.id, pending);
        Ok(())
    }

    async fn delete(&self, match_id: &MatchId) -> crate::error::Result<bool> {
        let mut matches =
            self.matches
                .write()
                .map_err(|_| crate::error::LeagueError::InternalError {
                    message: "Failed to acquire pending matches write lock".to_string(),
                })?;

        Ok(matches.remove(match_id).is_some())
    }

    async fn pending_for_player(
        &self,
        player: &PlayerId,
    ) -> crate::error::Result<Vec<PendingMatch>> {
        let matches = self
            .matches
            .read()
            .map_err(|_| crate::error::LeagueError::InternalError {
                message: "Failed to acquire pending matches read lock".to_string(),
            })?;

        let mut found: Vec<PendingMatch> = matches
            .values()
            .filter(|m| &m.player_one == player || &m.player_two == player)
            .cloned()
            .collect();

        found.sort_by_key(|m| m.time_created);
        Ok(found)
    }
}
