//! Two-party match submission and approval workflow
//!
//! A match is logged by one player, held as a pending record until the
//! opponent approves it, and only then rated and written to the approved
//! match history.

pub mod pending;
pub mod submission;

// Re-export commonly used types
pub use pending::{InMemoryPendingMatchStore, PendingMatchStore};
pub use submission::{ApprovedMatch, MatchAmendment, MatchWorkflow};
