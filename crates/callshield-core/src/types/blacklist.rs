//! Blacklisted phone numbers

use super::risk::RiskLevel;
use crate::error::{CoreError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provenance tag applied to entries added from the console
pub const DEFAULT_SOURCE: &str = "manual_admin";

/// Severity applied to entries added without an explicit level
pub const DEFAULT_RISK_LEVEL: i64 = 5;

const MIN_DIGITS: usize = 3;
const MAX_DIGITS: usize = 20;

/// A stored blacklist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlacklistEntry {
    /// Store-assigned identifier, never reused
    pub id: u64,

    /// Normalized phone number (surrounding whitespace removed)
    pub number: String,

    /// Provenance tag, e.g. `manual_admin` or `system`
    pub source: String,

    pub risk_level: RiskLevel,

    /// Free-text reason
    pub description: String,

    pub created_at: DateTime<Utc>,
}

/// Inbound payload for blacklisting a number
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBlacklistEntry {
    pub number: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_risk_level")]
    pub risk_level: i64,
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_risk_level() -> i64 {
    DEFAULT_RISK_LEVEL
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

impl NewBlacklistEntry {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            description: String::new(),
            risk_level: DEFAULT_RISK_LEVEL,
            source: default_source(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_risk_level(mut self, risk_level: i64) -> Self {
        self.risk_level = risk_level;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Check every field, returning the normalized number and typed level
    pub fn validate(&self) -> Result<(String, RiskLevel)> {
        let number = normalize_number(&self.number)?;
        let level = RiskLevel::new(self.risk_level)?;
        if self.source.trim().is_empty() {
            return Err(CoreError::validation("source must not be empty"));
        }
        Ok((number, level))
    }

    /// Validate and materialize into a stored entry
    pub fn into_entry(self, id: u64, created_at: DateTime<Utc>) -> Result<BlacklistEntry> {
        let (number, risk_level) = self.validate()?;
        Ok(BlacklistEntry {
            id,
            number,
            source: self.source.trim().to_string(),
            risk_level,
            description: self.description,
            created_at,
        })
    }
}

/// Structural check for a phone number
///
/// Accepts an optional leading `+` followed by ASCII digits only. Returns the
/// trimmed number so lookups compare like with like.
pub fn normalize_number(raw: &str) -> Result<String> {
    let number = raw.trim();
    if number.is_empty() {
        return Err(CoreError::validation("number must not be empty"));
    }

    let digits = number.strip_prefix('+').unwrap_or(number);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(CoreError::validation(format!(
            "number must contain digits only, got '{}'",
            number
        )));
    }
    if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) {
        return Err(CoreError::validation(format!(
            "number must have between {} and {} digits",
            MIN_DIGITS, MAX_DIGITS
        )));
    }

    Ok(number.to_string())
}
