//! Per-period match quota accounting
//!
//! This module counts how many approved matches a player has logged in a
//! match period and derives the remaining quota, delegating record lookups
//! to a store interface.

pub mod accountant;
pub mod store;

// Re-export commonly used types
pub use accountant::MatchAccountant;
pub use store::{InMemoryMatchRecordStore, MatchRecordStore};
