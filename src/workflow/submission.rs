//! Match workflow orchestration: submit, amend, approve, discard
//!
//! Coordinates the period resolver, quota accountant and rating engine so a
//! match only enters the approved history once both participants have signed
//! off on the same score. Rating writes are last-writer-wins; transactional
//! guarantees belong to the backing store, not this layer.

use crate::error::LeagueError;
use crate::quota::{MatchAccountant, MatchRecordStore};
use crate::rating::elo::RatingUpdate;
use crate::rating::{RatingCalculator, RatingStorage};
use crate::schedule::resolver::current_period;
use crate::schedule::{Period, PeriodProvider};
use crate::types::{
    MatchId, MatchRecord, MatchReport, MatchScore, PendingMatch, PlayerId, PlayerSlot,
};
use crate::utils::{current_timestamp, generate_match_id};
use crate::workflow::pending::PendingMatchStore;
use std::sync::Arc;
use tracing::{debug, info};

/// Participant edits to a pending match
#[derive(Debug, Clone, Default)]
pub struct MatchAmendment {
    pub deck_one: Option<String>,
    pub deck_two: Option<String>,
    pub score: Option<MatchScore>,
}

/// Outcome of a successful approval
#[derive(Debug, Clone)]
pub struct ApprovedMatch {
    pub record: MatchRecord,
    pub rating_update: RatingUpdate,
}

/// Orchestrates the two-party match logging workflow
pub struct MatchWorkflow {
    periods: Arc<dyn PeriodProvider>,
    records: Arc<dyn MatchRecordStore>,
    pending: Arc<dyn PendingMatchStore>,
    ratings: Arc<dyn RatingStorage>,
    calculator: Arc<dyn RatingCalculator>,
    accountant: MatchAccountant,
}

impl MatchWorkflow {
    pub fn new(
        periods: Arc<dyn PeriodProvider>,
        records: Arc<dyn MatchRecordStore>,
        pending: Arc<dyn PendingMatchStore>,
        ratings: Arc<dyn RatingStorage>,
        calculator: Arc<dyn RatingCalculator>,
    ) -> Self {
        let accountant = MatchAccountant::new(records.clone());
        Self {
            periods,
            records,
            pending,
            ratings,
            calculator,
            accountant,
        }
    }

    /// Quota accountant over the same record store (for UI quota displays)
    pub fn accountant(&self) -> &MatchAccountant {
        &self.accountant
    }

    /// Resolve the period active right now
    pub async fn active_period(&self) -> crate::error::Result<Period> {
        let periods = self.periods.all_periods().await?;
        current_period(&periods, current_timestamp())
            .cloned()
            .ok_or_else(|| LeagueError::NoActivePeriod.into())
    }

    /// Submit a match report, creating a pending match that awaits the
    /// opponent's approval.
    ///
    /// Rejects self-play and malformed scores, resolves the active period,
    /// and re-checks both players' quotas before storing.
    pub async fn submit(&self, report: MatchReport) -> crate::error::Result<PendingMatch> {
        if report.player_one == report.player_two {
            return Err(LeagueError::InvalidMatchReport {
                reason: "A player cannot play against themselves".to_string(),
            }
            .into());
        }
        validate_score(&report.score)?;

        let period = self.active_period().await?;

        for player in [&report.player_one, &report.player_two] {
            let count = self
                .accountant
                .match_count(player, &period.id, period.matches_per_player)
                .await;
            if count.matches_remaining == 0 {
                return Err(LeagueError::QuotaExhausted {
                    player: player.clone(),
                    period_id: period.id.clone(),
                }
                .into());
            }
        }

        let pending = PendingMatch {
            id: generate_match_id(),
            period_id: period.id.clone(),
            player_one: report.player_one,
            player_two: report.player_two,
            deck_one: report.deck_one,
            deck_two: report.deck_two,
            score: report.score,
            p1_approval: true,
            p2_approval: false,
            time_created: current_timestamp(),
        };

        self.pending.insert(pending.clone()).await?;

        info!(
            match_id = %pending.id,
            period_id = %pending.period_id,
            player_one = %pending.player_one,
            player_two = %pending.player_two,
            score = %pending.score,
            "Match submitted, awaiting opponent approval"
        );

        Ok(pending)
    }

    /// Amend a pending match. Any participant may edit decks or the score;
    /// doing so resets approval so only the editor's side is signed off.
    pub async fn amend(
        &self,
        match_id: &MatchId,
        editor: &PlayerId,
        amendment: MatchAmendment,
    ) -> crate::error::Result<PendingMatch> {
        let mut pending = self.get_pending(match_id).await?;

        let slot = pending
            .slot_of(editor)
            .ok_or_else(|| LeagueError::NotAParticipant {
                player_id: editor.clone(),
            })?;

        if let Some(deck_one) = amendment.deck_one {
            pending.deck_one = deck_one;
        }
        if let Some(deck_two) = amendment.deck_two {
            pending.deck_two = deck_two;
        }
        if let Some(score) = amendment.score {
            pending.score = score;
        }
        validate_score(&pending.score)?;

        pending.p1_approval = slot == PlayerSlot::One;
        pending.p2_approval = slot == PlayerSlot::Two;

        self.pending.update(pending.clone()).await?;

        debug!(
            match_id = %pending.id,
            editor = %editor,
            "Pending match amended, opposite side must re-approve"
        );

        Ok(pending)
    }

    /// Approve a pending match as the not-yet-approved participant.
    ///
    /// Computes the rating update, applies it to both players' standings,
    /// writes the approved record tagged with the match's period, and
    /// removes the pending entry.
    pub async fn approve(
        &self,
        match_id: &MatchId,
        approver: &PlayerId,
    ) -> crate::error::Result<ApprovedMatch> {
        let pending = self.get_pending(match_id).await?;

        let slot = pending
            .slot_of(approver)
            .ok_or_else(|| LeagueError::NotAParticipant {
                player_id: approver.clone(),
            })?;

        let already_approved = match slot {
            PlayerSlot::One => pending.p1_approval,
            PlayerSlot::Two => pending.p2_approval,
        };
        if already_approved {
            return Err(LeagueError::InvalidMatchReport {
                reason: "Approval must come from the opposite side".to_string(),
            }
            .into());
        }
        validate_score(&pending.score)?;

        let initial = self.calculator.initial_rating();
        let mut entry_one = self.ratings.get_or_create(&pending.player_one, initial)?;
        let mut entry_two = self.ratings.get_or_create(&pending.player_two, initial)?;

        let update = self
            .calculator
            .rate(entry_one.rating, entry_two.rating, &pending.score);

        let one_won = pending.score.winner() == Some(PlayerSlot::One);
        entry_one.apply_update(update.delta_a, one_won);
        entry_two.apply_update(update.delta_b, !one_won);
        self.ratings.store_rating(entry_one)?;
        self.ratings.store_rating(entry_two)?;

        let record = MatchRecord {
            id: generate_match_id(),
            period_id: pending.period_id.clone(),
            player_one: pending.player_one.clone(),
            player_two: pending.player_two.clone(),
            deck_one: pending.deck_one.clone(),
            deck_two: pending.deck_two.clone(),
            score: pending.score,
            elo_change_one: update.delta_a,
            elo_change_two: update.delta_b,
            time_created: pending.time_created,
        };
        self.records.insert_match(record.clone()).await?;
        self.pending.delete(match_id).await?;

        info!(
            match_id = %match_id,
            record_id = %record.id,
            period_id = %record.period_id,
            delta_one = update.delta_a,
            delta_two = update.delta_b,
            "Match approved and rated"
        );

        Ok(ApprovedMatch {
            record,
            rating_update: update,
        })
    }

    /// Discard a pending match. Any participant may do this.
    pub async fn discard(
        &self,
        match_id: &MatchId,
        requester: &PlayerId,
    ) -> crate::error::Result<()> {
        let pending = self.get_pending(match_id).await?;

        if pending.slot_of(requester).is_none() {
            return Err(LeagueError::NotAParticipant {
                player_id: requester.clone(),
            }
            .into());
        }

        self.pending.delete(match_id).await?;
        info!(match_id = %match_id, requester = %requester, "Pending match discarded");
        Ok(())
    }

    async fn get_pending(&self, match_id: &MatchId) -> crate::error::Result<PendingMatch> {
        self.pending
            .get(match_id)
            .await?
            .ok_or_else(|| {
                LeagueError::MatchNotFound {
                    match_id: match_id.to_string(),
                }
                .into()
            })
    }
}

/// Reject anything that is not a finished best-of-three score
fn validate_score(score: &MatchScore) -> crate::error::Result<()> {
    if !score.is_valid_best_of_three() {
        return Err(LeagueError::InvalidMatchReport {
            reason: format!("Invalid score {}: one player must have exactly 2 wins", score),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quota::InMemoryMatchRecordStore;
    use crate::rating::{EloCalculator, InMemoryRatingStorage};
    use crate::schedule::InMemoryPeriodProvider;
    use crate::workflow::pending::InMemoryPendingMatchStore;

    fn test_workflow() -> MatchWorkflow {
        // A single period matches any instant thanks to week wrap-around
        let periods = InMemoryPeriodProvider::new();
        periods
            .add_period(Period::new("p1".to_string(), 2, 17, 0, 3))
            .unwrap();

        MatchWorkflow::new(
            Arc::new(periods),
            Arc::new(InMemoryMatchRecordStore::new()),
            Arc::new(InMemoryPendingMatchStore::new()),
            Arc::new(InMemoryRatingStorage::new()),
            Arc::new(EloCalculator::default()),
        )
    }

    fn report(score: MatchScore) -> MatchReport {
        MatchReport {
            player_one: "ann@example.com".to_string(),
            player_two: "bob@example.com".to_string(),
            deck_one: "Mono Red".to_string(),
            deck_two: "Azorius Control".to_string(),
            score,
        }
    }

    #[tokio::test]
    async fn test_submit_creates_pending_with_submitter_approval() {
        let workflow = test_workflow();
        let pending = workflow.submit(report(MatchScore::new(2, 1))).await.unwrap();

        assert!(pending.p1_approval);
        assert!(!pending.p2_approval);
        assert_eq!(pending.period_id, "p1");
    }

    #[tokio::test]
    async fn test_submit_rejects_self_play_and_bad_scores() {
        let workflow = test_workflow();

        let mut selfie = report(MatchScore::new(2, 0));
        selfie.player_two = selfie.player_one.clone();
        assert!(workflow.submit(selfie).await.is_err());

        assert!(workflow.submit(report(MatchScore::new(1, 1))).await.is_err());
        assert!(workflow.submit(report(MatchScore::new(2, 2))).await.is_err());
        assert!(workflow.submit(report(MatchScore::new(0, 0))).await.is_err());
    }

    #[tokio::test]
    async fn test_submit_requires_configured_period() {
        let workflow = MatchWorkflow::new(
            Arc::new(InMemoryPeriodProvider::new()),
            Arc::new(InMemoryMatchRecordStore::new()),
            Arc::new(InMemoryPendingMatchStore::new()),
            Arc::new(InMemoryRatingStorage::new()),
            Arc::new(EloCalculator::default()),
        );

        let err = workflow
            .submit(report(MatchScore::new(2, 0)))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No match period"));
    }

    #[tokio::test]
    async fn test_approve_rates_and_records() {
        let workflow = test_workflow();
        let pending = workflow.submit(report(MatchScore::new(2, 0))).await.unwrap();

        let approved = workflow
            .approve(&pending.id, &"bob@example.com".to_string())
            .await
            .unwrap();

        // Both players started at the default 1000
        assert_eq!(approved.rating_update.new_rating_a, 1016);
        assert_eq!(approved.rating_update.new_rating_b, 984);
        assert_eq!(approved.record.elo_change_one, 16);
        assert_eq!(approved.record.elo_change_two, -16);
        assert_eq!(approved.record.period_id, "p1");

        // Pending entry is gone
        assert!(workflow
            .approve(&pending.id, &"bob@example.com".to_string())
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_submitter_cannot_self_approve() {
        let workflow = test_workflow();
        let pending = workflow.submit(report(MatchScore::new(2, 0))).await.unwrap();

        let result = workflow
            .approve(&pending.id, &"ann@example.com".to_string())
            .await;
        assert!(result.is_err());

        let result = workflow
            .approve(&pending.id, &"eve@example.com".to_string())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_amend_resets_opposite_approval() {
        let workflow = test_workflow();
        let pending = workflow.submit(report(MatchScore::new(2, 0))).await.unwrap();

        // Bob flips the result; now Ann has to re-approve
        let amended = workflow
            .amend(
                &pending.id,
                &"bob@example.com".to_string(),
                MatchAmendment {
                    score: Some(MatchScore::new(1, 2)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(!amended.p1_approval);
        assert!(amended.p2_approval);
        assert_eq!(amended.score, MatchScore::new(1, 2));

        let approved = workflow
            .approve(&pending.id, &"ann@example.com".to_string())
            .await
            .unwrap();
        assert_eq!(approved.rating_update.delta_b, 16);
    }

    #[tokio::test]
    async fn test_amend_rejects_invalid_score_and_outsiders() {
        let workflow = test_workflow();
        let pending = workflow.submit(report(MatchScore::new(2, 0))).await.unwrap();

        let bad_score = workflow
            .amend(
                &pending.id,
                &"bob@example.com".to_string(),
                MatchAmendment {
                    score: Some(MatchScore::new(1, 1)),
                    ..Default::default()
                },
            )
            .await;
        assert!(bad_score.is_err());

        let outsider = workflow
            .amend(
                &pending.id,
                &"eve@example.com".to_string(),
                MatchAmendment::default(),
            )
            .await;
        assert!(outsider.is_err());
    }

    #[tokio::test]
    async fn test_quota_exhaustion_blocks_submission() {
        let workflow = test_workflow();

        // Quota is 3 per period; log and approve three matches
        for _ in 0..3 {
            let pending = workflow.submit(report(MatchScore::new(2, 1))).await.unwrap();
            workflow
                .approve(&pending.id, &"bob@example.com".to_string())
                .await
                .unwrap();
        }

        let err = workflow
            .submit(report(MatchScore::new(2, 0)))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("quota exhausted"));
    }

    #[tokio::test]
    async fn test_discard_removes_pending() {
        let workflow = test_workflow();
        let pending = workflow.submit(report(MatchScore::new(2, 0))).await.unwrap();

        assert!(workflow
            .discard(&pending.id, &"eve@example.com".to_string())
            .await
            .is_err());

        workflow
            .discard(&pending.id, &"ann@example.com".to_string())
            .await
            .unwrap();

        assert!(workflow
            .approve(&pending.id, &"bob@example.com".to_string())
            .await
            .is_err());
    }
}
