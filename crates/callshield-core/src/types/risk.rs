//! Risk levels, rule actions and verdicts

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a rule or blacklist entry
///
/// Valid user-supplied levels are `1..=5`. Level `0` means "no signal" and is
/// only produced by aggregation when nothing matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskLevel(u8);

impl RiskLevel {
    /// Lowest accepted level
    pub const MIN: u8 = 1;

    /// Highest accepted level
    pub const MAX: u8 = 5;

    /// No rule fired
    pub const NONE: RiskLevel = RiskLevel(0);

    /// Validate a raw level from an inbound payload
    pub fn new(level: i64) -> Result<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&level) {
            Ok(RiskLevel(level as u8))
        } else {
            Err(CoreError::validation(format!(
                "risk_level must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                level
            )))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Action recommended by a single rule when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    /// Flag for review
    Alert,

    /// Reject or terminate
    Block,
}

impl RuleAction {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleAction::Alert => "alert",
            RuleAction::Block => "block",
        }
    }
}

impl FromStr for RuleAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alert" => Ok(RuleAction::Alert),
            "block" => Ok(RuleAction::Block),
            other => Err(CoreError::validation(format!(
                "action must be one of 'alert' or 'block', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall recommendation for a piece of text
///
/// Variants are declared in ascending severity so the derived `Ord` is the
/// reduction order: `Pass < Alert < Block`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// No concern
    Pass,

    /// Flag for review
    Alert,

    /// Reject or terminate
    Block,
}

impl Default for Verdict {
    fn default() -> Self {
        Verdict::Pass
    }
}

impl From<RuleAction> for Verdict {
    fn from(action: RuleAction) -> Self {
        match action {
            RuleAction::Alert => Verdict::Alert,
            RuleAction::Block => Verdict::Block,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Pass => "pass",
            Verdict::Alert => "alert",
            Verdict::Block => "block",
        };
        f.write_str(s)
    }
}
