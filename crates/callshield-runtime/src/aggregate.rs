//! Reduction of matched rules into a single risk signal

use callshield_core::{RiskLevel, Rule, Verdict};

/// Combines matched rules into one risk level and one verdict
///
/// The level is the maximum of the matched levels, never a sum. The verdict
/// is the maximum under `Pass < Alert < Block`, so one blocking rule decides
/// the outcome regardless of how many alerting rules fired alongside it.
pub struct RiskAggregator;

impl RiskAggregator {
    pub fn aggregate(matched: &[&Rule]) -> (u8, Verdict) {
        matched.iter().fold(
            (RiskLevel::NONE.value(), Verdict::Pass),
            |(level, verdict), rule| {
                (
                    level.max(rule.risk_level.value()),
                    verdict.max(Verdict::from(rule.action)),
                )
            },
        )
    }
}
