//! Match record store interface and implementations
//!
//! Approved matches are queried by period and by which slot a player
//! occupies, so the engine never depends on a specific document-store
//! query dialect.

use crate::types::{MatchRecord, PeriodId, PlayerId, PlayerSlot};
use async_trait::async_trait;
use std::sync::RwLock;

/// Trait for approved match record lookups and writes
#[async_trait]
pub trait MatchRecordStore: Send + Sync {
    /// Count records in a period where the player occupies the given slot
    async fn count_matches(
        &self,
        period_id: &PeriodId,
        slot: PlayerSlot,
        player: &PlayerId,
    ) -> crate::error::Result<usize>;

    /// Append an approved match record
    async fn insert_match(&self, record: MatchRecord) -> crate::error::Result<()>;

    /// All records approved during a period (match history views)
    async fn matches_for_period(
        &self,
        period_id: &PeriodId,
    ) -> crate::error::Result<Vec<MatchRecord>>;
}

/// In-memory match record store implementation
#[derive(Debug, Default)]
pub struct InMemoryMatchRecordStore {
    records: RwLock<Vec<MatchRecord>>,
}

impl InMemoryMatchRecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored records
    pub fn record_count(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl MatchRecordStore for InMemoryMatchRecordStore {
    async fn count_matches(
        &self,
        period_id: &PeriodId,
        slot: PlayerSlot,
        player: &PlayerId,
    ) -> crate::error::Result<usize> {
        let records = self
            .records
            .read()
            .map_err(|_| crate::error::LeagueError::InternalError {
                message: "Failed to acquire records read lock".to_string(),
            })?;

        let count = records
            .iter()
            .filter(|r| &r.period_id == period_id)
            .filter(|r| match slot {
                PlayerSlot::One => &r.player_one == player,
                PlayerSlot::Two => &r.player_two == player,
            })
            .count();

        Ok(count)
    }

    async fn insert_match(&self, record: MatchRecord) -> crate::error::Result<()> {
        let mut records =
            self.records
                .write()
                .map_err(|_| crate::error::LeagueError::InternalError {
                    message: "Failed to acquire records write lock".to_string(),
                })?;

        records.push(record);
        Ok(())
    }

    async fn matches_for_period(
        &self,
        period_id: &PeriodId,
    ) -> crate::error::Result<Vec<MatchRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| crate::error::LeagueError::InternalError {
                message: "Failed to acquire records read lock".to_string(),
            })?;

        Ok(records
            .iter()
            .filter(|r| &r.period_id == period_id)
            .cloned()
            .collect())
    }
}
