//! CallShield SDK
//!
//! High-level API over the rule store, blacklist store, matcher and stats.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod seed;

// Re-export main types
pub use builder::ShieldEngineBuilder;
pub use config::EngineConfig;
pub use engine::ShieldEngine;
pub use error::{Result, SdkError};
pub use seed::SeedData;

// Re-export commonly used types from dependencies
pub use callshield_core::{
    BlacklistEntry, MatchResult, NewBlacklistEntry, NewRule, Rule, RuleAction, Stats, Verdict,
};
pub use callshield_runtime::{CallCounters, CallOutcome, Page, StatsRecorder, StorePolicy};
