//! Weekly match-period scheduling
//!
//! Periods are recurring weekly time slots, anchored to the league's fixed
//! reference timezone (UTC-7, "MST", no daylight saving). This module
//! provides the period type, resolution of an instant to the active period,
//! and the period source interface.

pub mod period;
pub mod provider;
pub mod resolver;

// Re-export commonly used types
pub use period::{format_period_time, format_period_time_short, Period};
pub use provider::{InMemoryPeriodProvider, PeriodProvider};
pub use resolver::{current_period, reference_time_key};
