//! Period source interface and implementations
//!
//! This module defines the interface for fetching the league's configured
//! match periods, plus an in-memory implementation that also covers the
//! admin lifecycle (create, edit, delete).

use crate::schedule::period::Period;
use crate::types::PeriodId;
use async_trait::async_trait;
use std::sync::RwLock;

/// Trait for providing the configured match periods
#[async_trait]
pub trait PeriodProvider: Send + Sync {
    /// Get all periods, sorted ascending by start time within the week
    async fn all_periods(&self) -> crate::error::Result<Vec<Period>>;
}

/// In-memory period provider with admin editing support
#[derive(Debug, Default)]
pub struct InMemoryPeriodProvider {
    periods: RwLock<Vec<Period>>,
}

impl InMemoryPeriodProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider pre-loaded with the given periods
    pub fn with_periods(periods: Vec<Period>) -> crate::error::Result<Self> {
        let provider = Self::new();
        for period in periods {
            provider.add_period(period)?;
        }
        Ok(provider)
    }

    /// Add a new period, keeping the list sorted by start time
    pub fn add_period(&self, period: Period) -> crate::error::Result<()> {
        period.validate()?;

        let mut periods = self
            .periods
            .write()
            .map_err(|_| crate::error::LeagueError::InternalError {
                message: "Failed to acquire periods write lock".to_string(),
            })?;

        periods.push(period);
        periods.sort_by_key(|p| p.time_key());
        Ok(())
    }

    /// Replace an existing period by id, keeping the list sorted
    pub fn update_period(&self, period: Period) -> crate::error::Result<()> {
        period.validate()?;

        let mut periods = self
            .periods
            .write()
            .map_err(|_| crate::error::LeagueError::InternalError {
                message: "Failed to acquire periods write lock".to_string(),
            })?;

        let existing = periods.iter_mut().find(|p| p.id == period.id).ok_or(
            crate::error::LeagueError::ConfigurationError {
                message: format!("No period with id {}", period.id),
            },
        )?;

        *existing = period;
        periods.sort_by_key(|p| p.time_key());
        Ok(())
    }

    /// Remove a period by id; returns whether anything was removed
    pub fn remove_period(&self, period_id: &PeriodId) -> crate::error::Result<bool> {
        let mut periods = self
            .periods
            .write()
            .map_err(|_| crate::error::LeagueError::InternalError {
                message: "Failed to acquire periods write lock".to_string(),
            })?;

        let before = periods.len();
        periods.retain(|p| &p.id != period_id);
        Ok(periods.len() != before)
    }
}

#[async_trait]
impl PeriodProvider for InMemoryPeriodProvider {
    async fn all_periods(&self) -> crate::error::Result<Vec<Period>> {
        let periods = self
            .periods
            .read()
            .map_err(|_| crate::error::LeagueError::InternalError {
                message: "Failed to acquire periods read lock".to_string(),
            })?;

        Ok(periods.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(id: &str, weekday: u8, hour: u8) -> Period {
        Period::new(id.to_string(), weekday, hour, 0, 3)
    }

    #[tokio::test]
    async fn test_periods_kept_sorted() {
        let provider = InMemoryPeriodProvider::new();
        provider.add_period(period("fri", 5, 20)).unwrap();
        provider.add_period(period("sun", 0, 8)).unwrap();
        provider.add_period(period("tue", 2, 17)).unwrap();

        let periods = provider.all_periods().await.unwrap();
        let ids: Vec<&str> = periods.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["sun", "tue", "fri"]);
    }

    #[tokio::test]
    async fn test_update_resorts_and_validates() {
        let provider =
            InMemoryPeriodProvider::with_periods(vec![period("a", 1, 10), period("b", 3, 10)])
                .unwrap();

        // Move "a" past "b"
        provider.update_period(period("a", 5, 10)).unwrap();
        let ids: Vec<String> = provider
            .all_periods()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);

        // Unknown id is rejected
        assert!(provider.update_period(period("missing", 1, 1)).is_err());
        // Invalid fields are rejected
        assert!(provider.update_period(period("b", 9, 1)).is_err());
    }

    #[tokio::test]
    async fn test_remove_period() {
        let provider =
            InMemoryPeriodProvider::with_periods(vec![period("a", 1, 10)]).unwrap();

        assert!(provider.remove_period(&"a".to_string()).unwrap());
        assert!(!provider.remove_period(&"a".to_string()).unwrap());
        assert!(provider.all_periods().await.unwrap().is_empty());
    }

    #[test]
    fn test_invalid_period_rejected_on_add() {
        let provider = InMemoryPeriodProvider::new();
        assert!(provider.add_period(period("bad", 7, 0)).is_err());
    }
}
