//! Keyword rule definitions

use super::risk::{RiskLevel, RuleAction};
use crate::error::{CoreError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored keyword rule
///
/// A rule fires when its `keyword` occurs verbatim inside the scanned text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Store-assigned identifier, never reused
    pub rule_id: u64,

    /// Literal text fragment to look for
    pub keyword: String,

    /// Severity when this rule fires
    pub risk_level: RiskLevel,

    /// Recommended action when this rule fires alone
    pub action: RuleAction,

    /// Optional operator note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Insertion time
    pub created_at: DateTime<Utc>,
}

/// Inbound payload for creating a rule
///
/// Fields are kept loosely typed so that out-of-range levels and unknown
/// actions surface as validation errors with a specific message instead of
/// a generic deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRule {
    pub keyword: String,
    pub risk_level: i64,
    pub action: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewRule {
    pub fn new(keyword: impl Into<String>, risk_level: i64, action: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            risk_level,
            action: action.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check every field, returning the typed level and action
    pub fn validate(&self) -> Result<(RiskLevel, RuleAction)> {
        if self.keyword.trim().is_empty() {
            return Err(CoreError::validation("keyword must not be empty"));
        }
        let level = RiskLevel::new(self.risk_level)?;
        let action = self.action.parse::<RuleAction>()?;
        Ok((level, action))
    }

    /// Validate and materialize into a stored rule
    ///
    /// The keyword is kept verbatim: matching is exact containment, so any
    /// surrounding whitespace the operator typed is part of the pattern.
    pub fn into_rule(self, rule_id: u64, created_at: DateTime<Utc>) -> Result<Rule> {
        let (risk_level, action) = self.validate()?;
        Ok(Rule {
            rule_id,
            keyword: self.keyword,
            risk_level,
            action,
            description: self.description.filter(|d| !d.trim().is_empty()),
            created_at,
        })
    }
}
