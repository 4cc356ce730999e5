//! Call counters and the dashboard stats projection
//!
//! Counters are fed by the call-handling pipeline through a [`StatsRecorder`]
//! handle. The console only ever reads them through [`StatsAggregator`].

use crate::store::{BlacklistStore, RuleStore};
use callshield_core::Stats;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Health label reported while the engine is serving
pub const HEALTHY: &str = "100%";

/// How a handled call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    /// Call completed without a fraud verdict
    Clean,

    /// Call was identified as fraud and blocked
    FraudBlocked,
}

/// Process-wide monitoring counters
#[derive(Debug, Default)]
pub struct CallCounters {
    total_users: AtomicU64,
    total_calls: AtomicU64,
    fraud_blocked: AtomicU64,
}

impl CallCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from counts restored from an external source
    pub fn with_initial(total_users: u64, total_calls: u64, fraud_blocked: u64) -> Self {
        Self {
            total_users: AtomicU64::new(total_users),
            total_calls: AtomicU64::new(total_calls),
            fraud_blocked: AtomicU64::new(fraud_blocked),
        }
    }

    pub fn total_users(&self) -> u64 {
        self.total_users.load(Ordering::Relaxed)
    }

    pub fn total_calls(&self) -> u64 {
        self.total_calls.load(Ordering::Relaxed)
    }

    pub fn fraud_blocked(&self) -> u64 {
        self.fraud_blocked.load(Ordering::Relaxed)
    }
}

/// Write handle given to the call-handling pipeline
#[derive(Debug, Clone)]
pub struct StatsRecorder {
    counters: Arc<CallCounters>,
}

impl StatsRecorder {
    pub fn new(counters: Arc<CallCounters>) -> Self {
        Self { counters }
    }

    pub fn record_user_registered(&self) {
        self.counters.total_users.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_call(&self, outcome: CallOutcome) {
        self.counters.total_calls.fetch_add(1, Ordering::Relaxed);
        if outcome == CallOutcome::FraudBlocked {
            self.counters.fraud_blocked.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// Read-only projection of counters and store sizes
pub struct StatsAggregator;

impl StatsAggregator {
    /// Build a stats snapshot; store-derived counts are taken at call time
    pub fn collect(counters: &CallCounters, rules: &RuleStore, blacklist: &BlacklistStore) -> Stats {
        Stats {
            total_users: counters.total_users(),
            total_calls: counters.total_calls(),
            fraud_blocked: counters.fraud_blocked(),
            active_rules: rules.len() as u64,
            blacklist_count: blacklist.len() as u64,
            system_health: HEALTHY.to_string(),
        }
    }
}
