//! Literal keyword matching
//!
//! A rule matches when its keyword occurs verbatim in the text. There is no
//! case folding or other normalization; keywords are domain phrases expected
//! to appear exactly as configured.

use crate::aggregate::RiskAggregator;
use crate::store::RuleSnapshot;
use callshield_core::{MatchResult, Rule};
use std::collections::HashSet;
use tracing::debug;

/// Scans text against a rule snapshot
pub struct MatchEngine;

impl MatchEngine {
    /// Every rule whose keyword occurs in `text`, in snapshot order
    pub fn scan<'a>(text: &str, rules: &'a [Rule]) -> Vec<&'a Rule> {
        rules
            .iter()
            .filter(|rule| !rule.keyword.is_empty() && text.contains(rule.keyword.as_str()))
            .collect()
    }

    /// Scan and aggregate into a match result
    ///
    /// Keywords are reported once each even if several rules share the same
    /// keyword text.
    pub fn evaluate(text: &str, snapshot: &RuleSnapshot) -> MatchResult {
        let matched = Self::scan(text, &snapshot.items);
        let (risk_level, action) = RiskAggregator::aggregate(&matched);

        let mut seen = HashSet::new();
        let hit_keywords: Vec<String> = matched
            .iter()
            .copied()
            .filter(|rule| seen.insert(rule.keyword.as_str()))
            .map(|rule| rule.keyword.clone())
            .collect();

        debug!(
            snapshot_version = snapshot.version,
            rules = snapshot.len(),
            hits = hit_keywords.len(),
            "text scanned"
        );

        MatchResult {
            text_length: text.chars().count(),
            hit_keywords,
            risk_level,
            action,
        }
    }
}
