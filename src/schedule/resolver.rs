//! Resolution of an instant to the active match period
//!
//! Periods recur weekly, so instants are compared only by weekday, hour and
//! minute in the reference timezone. The reference timezone is a fixed
//! UTC-7 offset; the league deliberately ignores daylight saving so period
//! boundaries never shift.

use crate::schedule::period::Period;
use chrono::{DateTime, Datelike, Duration, Timelike, Utc};

/// Hours the reference timezone lags UTC
const REFERENCE_OFFSET_HOURS: i64 = 7;

/// Comparable within-week key for an instant, in the reference timezone.
/// Same encoding as [`Period::time_key`]: weekday*10000 + hour*100 + minute.
pub fn reference_time_key(now: DateTime<Utc>) -> u32 {
    let local = now.naive_utc() - Duration::hours(REFERENCE_OFFSET_HOURS);
    local.weekday().num_days_from_sunday() * 10000 + local.hour() * 100 + local.minute()
}

/// Find the period whose start is the most recent at-or-before `now`.
///
/// Returns `None` only when `periods` is empty. When `now` falls earlier in
/// the week than every period's start, the search wraps around to the
/// latest period, which began the previous week and is still active.
///
/// The input does not need to be sorted; a copy is ordered internally
/// (stable, so equal start times keep their input order).
pub fn current_period<'a>(periods: &'a [Period], now: DateTime<Utc>) -> Option<&'a Period> {
    if periods.is_empty() {
        return None;
    }

    let mut sorted: Vec<&Period> = periods.iter().collect();
    sorted.sort_by_key(|p| p.time_key());

    let now_key = reference_time_key(now);

    let mut current: Option<&Period> = None;
    for &period in &sorted {
        if period.time_key() <= now_key {
            current = Some(period);
        } else {
            // Sorted ascending, so later periods cannot qualify either
            break;
        }
    }

    current.or_else(|| sorted.last().copied())
}
