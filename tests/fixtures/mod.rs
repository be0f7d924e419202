//! Test fixtures and mock implementations for integration testing

use async_trait::async_trait;
use league_engine::error::Result;
use league_engine::quota::{InMemoryMatchRecordStore, MatchRecordStore};
use league_engine::rating::{EloCalculator, InMemoryRatingStorage};
use league_engine::schedule::{InMemoryPeriodProvider, Period};
use league_engine::types::{MatchRecord, PeriodId, PlayerId, PlayerSlot};
use league_engine::workflow::{InMemoryPendingMatchStore, MatchWorkflow};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Record store whose count lookups can be switched to fail, simulating a
/// document-store outage. Writes always succeed.
#[derive(Default)]
pub struct OutageProneRecordStore {
    inner: InMemoryMatchRecordStore,
    counts_failing: AtomicBool,
    failed_lookups: AtomicUsize,
}

impl OutageProneRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the simulated outage
    pub fn set_counts_failing(&self, failing: bool) {
        self.counts_failing.store(failing, Ordering::SeqCst);
    }

    /// Number of lookups rejected while the outage was active
    pub fn failed_lookup_count(&self) -> usize {
        self.failed_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MatchRecordStore for OutageProneRecordStore {
    async fn count_matches(
        &self,
        period_id: &PeriodId,
        slot: PlayerSlot,
        player: &PlayerId,
    ) -> Result<usize> {
        if self.counts_failing.load(Ordering::SeqCst) {
            self.failed_lookups.fetch_add(1, Ordering::SeqCst);
            return Err(anyhow::anyhow!("simulated store outage"));
        }
        self.inner.count_matches(period_id, slot, player).await
    }

    async fn insert_match(&self, record: MatchRecord) -> Result<()> {
        self.inner.insert_match(record).await
    }

    async fn matches_for_period(&self, period_id: &PeriodId) -> Result<Vec<MatchRecord>> {
        self.inner.matches_for_period(period_id).await
    }
}

/// Complete workflow over in-memory stores with an outage-prone record store
pub struct TestSystem {
    pub workflow: MatchWorkflow,
    pub records: Arc<OutageProneRecordStore>,
    pub ratings: Arc<InMemoryRatingStorage>,
    pub periods: Arc<InMemoryPeriodProvider>,
}

/// Build a test system with a single period of the given quota.
/// One period is always active thanks to week wrap-around.
pub fn create_test_system(quota: u32) -> TestSystem {
    let periods = Arc::new(InMemoryPeriodProvider::new());
    periods
        .add_period(Period::new("it-period".to_string(), 2, 17, 0, quota))
        .expect("valid test period");

    let records = Arc::new(OutageProneRecordStore::new());
    let ratings = Arc::new(InMemoryRatingStorage::new());

    let workflow = MatchWorkflow::new(
        periods.clone(),
        records.clone(),
        Arc::new(InMemoryPendingMatchStore::new()),
        ratings.clone(),
        Arc::new(EloCalculator::default()),
    );

    TestSystem {
        workflow,
        records,
        ratings,
        periods,
    }
}
