//! Domain types for CallShield
//!
//! This module contains:
//! - Risk levels and the rule action / verdict enums
//! - Keyword rules
//! - Blacklist entries
//! - Match results and monitoring stats

pub mod blacklist;
pub mod risk;
pub mod rule;
pub mod stats;

pub use blacklist::{BlacklistEntry, NewBlacklistEntry};
pub use risk::{RiskLevel, RuleAction, Verdict};
pub use rule::{NewRule, Rule};
pub use stats::{MatchResult, Stats};
