//! Match period type and display formatting

use crate::types::PeriodId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weekday display names, indexed by weekday number (0 = Sunday)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// A recurring weekly match period
///
/// The start time is expressed in the league's reference timezone (UTC-7).
/// Each period carries the per-player match quota that applies until the
/// next period begins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub id: PeriodId,
    /// 0 = Sunday .. 6 = Saturday
    pub weekday: u8,
    /// 0-23, reference timezone
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// Maximum matches each player may log during this period
    pub matches_per_player: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Period {
    /// Create a period starting at the given weekday/hour/minute
    pub fn new(id: PeriodId, weekday: u8, hour: u8, minute: u8, matches_per_player: u32) -> Self {
        let now = Utc::now();
        Self {
            id,
            weekday,
            hour,
            minute,
            matches_per_player,
            created_at: now,
            updated_at: now,
        }
    }

    /// Single comparable key for ordering start times within the week:
    /// weekday*10000 + hour*100 + minute
    pub fn time_key(&self) -> u32 {
        self.weekday as u32 * 10000 + self.hour as u32 * 100 + self.minute as u32
    }

    /// Validate field ranges (admin input path)
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.weekday > 6 {
            return Err(crate::error::LeagueError::ConfigurationError {
                message: format!("Weekday must be 0-6, got {}", self.weekday),
            }
            .into());
        }

        if self.hour > 23 {
            return Err(crate::error::LeagueError::ConfigurationError {
                message: format!("Hour must be 0-23, got {}", self.hour),
            }
            .into());
        }

        if self.minute > 59 {
            return Err(crate::error::LeagueError::ConfigurationError {
                message: format!("Minute must be 0-59, got {}", self.minute),
            }
            .into());
        }

        if self.matches_per_player == 0 {
            return Err(crate::error::LeagueError::ConfigurationError {
                message: "Match quota must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Format a period start for display, e.g. "Tuesday 5:00 PM MST"
pub fn format_period_time(period: &Period) -> String {
    let weekday_name = WEEKDAY_NAMES[period.weekday as usize % 7];
    let (hour12, ampm) = twelve_hour(period.hour);
    format!("{} {}:{:02} {} MST", weekday_name, hour12, period.minute, ampm)
}

/// Short display form, e.g. "Tue 5:00 PM"
pub fn format_period_time_short(period: &Period) -> String {
    let weekday_short = &WEEKDAY_NAMES[period.weekday as usize % 7][..3];
    let (hour12, ampm) = twelve_hour(period.hour);
    format!("{} {}:{:02} {}", weekday_short, hour12, period.minute, ampm)
}

fn twelve_hour(hour: u8) -> (u8, &'static str) {
    let hour12 = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    let ampm = if hour >= 12 { "PM" } else { "AM" };
    (hour12, ampm)
}
