//! Match quota accounting with a fail-open store policy
//!
//! The accountant counts a player's approved matches in a period against
//! the period's quota. Store failures are never surfaced to callers: the
//! lookup falls back to "nothing logged" so a transient outage cannot lock
//! players out of submitting, accepting that quotas may be overrun while
//! the store is down. Every fallback is logged.

use crate::quota::store::MatchRecordStore;
use crate::types::{MatchCount, PeriodId, PlayerId, PlayerSlot};
use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Computes per-player quota usage for a match period
#[derive(Clone)]
pub struct MatchAccountant {
    store: Arc<dyn MatchRecordStore>,
}

impl MatchAccountant {
    /// Create an accountant over the given record store
    pub fn new(store: Arc<dyn MatchRecordStore>) -> Self {
        Self { store }
    }

    /// Count a player's matches in a period and derive the remaining quota.
    ///
    /// The player is looked up in both record slots concurrently; the totals
    /// are summed without deduplication since a player cannot occupy both
    /// sides of one record. On any lookup failure this falls back to a full
    /// remaining quota (fail-open) and logs the error.
    pub async fn match_count(
        &self,
        player: &PlayerId,
        period_id: &PeriodId,
        period_limit: u32,
    ) -> MatchCount {
        let (as_one, as_two) = tokio::join!(
            self.store.count_matches(period_id, PlayerSlot::One, player),
            self.store.count_matches(period_id, PlayerSlot::Two, player),
        );

        match (as_one, as_two) {
            (Ok(one), Ok(two)) => MatchCount::from_logged(
                player.clone(),
                period_id.clone(),
                period_limit,
                u32::try_from(one.saturating_add(two)).unwrap_or(u32::MAX),
            ),
            (first, second) => {
                let error = first.err().or(second.err());
                warn!(
                    player = %player,
                    period_id = %period_id,
                    error = ?error,
                    "Match count lookup failed, assuming full quota remains"
                );
                MatchCount::from_logged(player.clone(), period_id.clone(), period_limit, 0)
            }
        }
    }

    /// Batch variant: counts for every player, looked up concurrently.
    ///
    /// Each player's lookup carries its own fail-open fallback, so one
    /// failure never affects the others.
    pub async fn match_counts(
        &self,
        players: &[PlayerId],
        period_id: &PeriodId,
        period_limit: u32,
    ) -> HashMap<PlayerId, MatchCount> {
        let lookups = players
            .iter()
            .map(|player| self.match_count(player, period_id, period_limit));

        join_all(lookups)
            .await
            .into_iter()
            .map(|count| (count.player.clone(), count))
            .collect()
    }
}
