//! Initial rule and blacklist data loaded from YAML
//!
//! ```yaml
//! rules:
//!   - keyword: 安全账户
//!     risk_level: 5
//!     action: block
//! blacklist:
//!   - number: "13800138000"
//!     description: 冒充公检法
//! ```

use crate::error::{Result, SdkError};
use callshield_core::{NewBlacklistEntry, NewRule};
use callshield_runtime::{BlacklistStore, RuleStore};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Seed document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub rules: Vec<NewRule>,

    #[serde(default)]
    pub blacklist: Vec<NewBlacklistEntry>,
}

impl SeedData {
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub async fn from_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_yaml(&content)
    }

    /// Insert every entry through the validated store path
    ///
    /// Returns the number of rules and blacklist entries inserted. Stops at
    /// the first invalid entry.
    pub fn apply(self, rules: &RuleStore, blacklist: &BlacklistStore) -> Result<(usize, usize)> {
        let rule_count = self.rules.len();
        for (index, rule) in self.rules.into_iter().enumerate() {
            let keyword = rule.keyword.clone();
            rules.add(rule).map_err(|e| {
                SdkError::Seed(format!("rule #{} ('{}'): {}", index + 1, keyword, e))
            })?;
        }

        let entry_count = self.blacklist.len();
        for (index, entry) in self.blacklist.into_iter().enumerate() {
            let number = entry.number.clone();
            blacklist.add(entry).map_err(|e| {
                SdkError::Seed(format!("blacklist #{} ('{}'): {}", index + 1, number, e))
            })?;
        }

        Ok((rule_count, entry_count))
    }
}
