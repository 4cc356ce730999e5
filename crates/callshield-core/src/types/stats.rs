//! Match results and monitoring stats

use super::risk::Verdict;
use serde::{Deserialize, Serialize};

/// Outcome of scanning one piece of text against a rule snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Number of characters scanned
    pub text_length: usize,

    /// Matched keywords in rule order, each reported once
    pub hit_keywords: Vec<String>,

    /// Highest severity among matched rules, 0 when nothing matched
    pub risk_level: u8,

    pub action: Verdict,
}

impl MatchResult {
    /// Result for text that triggered no rule
    pub fn pass(text_length: usize) -> Self {
        Self {
            text_length,
            hit_keywords: Vec::new(),
            risk_level: 0,
            action: Verdict::Pass,
        }
    }

    pub fn is_hit(&self) -> bool {
        !self.hit_keywords.is_empty()
    }
}

/// Read-only monitoring snapshot shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_users: u64,
    pub total_calls: u64,
    pub fraud_blocked: u64,
    /// Number of rules at read time
    pub active_rules: u64,
    /// Number of blacklisted numbers at read time
    pub blacklist_count: u64,
    pub system_health: String,
}
