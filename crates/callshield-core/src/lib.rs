//! CallShield Core - domain types for the rule matching engine
//!
//! This crate provides the fundamental types shared by every CallShield crate:
//! - Keyword rules and their validated inbound shape
//! - Blacklist entries
//! - Risk levels, rule actions and the verdict order used for aggregation
//! - Match results and monitoring stats
//! - Error types

pub mod error;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{
    BlacklistEntry, MatchResult, NewBlacklistEntry, NewRule, RiskLevel, Rule, RuleAction, Stats,
    Verdict,
};
