//! CallShield Runtime - stores and matching for the fraud rule engine
//!
//! - `snapshot`: copy-on-write publication of immutable versions
//! - `store`: rule and blacklist stores built on snapshots
//! - `matcher`: literal keyword scanning against a rule snapshot
//! - `aggregate`: reduction of matched rules into one risk level and verdict
//! - `stats`: call counters and the dashboard stats projection

pub mod aggregate;
pub mod error;
pub mod matcher;
pub mod snapshot;
pub mod stats;
pub mod store;

pub use aggregate::RiskAggregator;
pub use error::{Result, RuntimeError};
pub use matcher::MatchEngine;
pub use snapshot::{Snapshot, SnapshotCell};
pub use stats::{CallCounters, CallOutcome, StatsAggregator, StatsRecorder};
pub use store::{
    BlacklistSnapshot, BlacklistStore, Page, RuleSnapshot, RuleStore, StorePolicy,
};
