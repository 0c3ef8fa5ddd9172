//! The allocation pipeline: need estimation, the greedy recommendation
//! planner, the scoring engine, and the ledger that turns a recommendation
//! into committed inventory.

pub mod domain;
pub(crate) mod ledger;
pub mod needs;
pub(crate) mod optimizer;
pub mod scoring;
pub(crate) mod service;

#[cfg(test)]
mod tests;

pub use domain::{Allocation, AllocationId, AllocationItem, AllocationStatus};
pub use ledger::{
    AllocationLedger, AllocationStatistics, CommitReceipt, ItemCommit, ItemCommitOutcome,
    LedgerError, TypeUtilization,
};
pub use needs::needs_for;
pub use optimizer::AllocationRecommendation;
pub use scoring::{ScoreBreakdown, ScoringConfig, ScoringEngine};
pub use service::ResponseCoordinator;
