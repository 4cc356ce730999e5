//! Configuration types for ShieldEngine

use callshield_runtime::{Page, StorePolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Uniqueness rules for keywords and numbers
    #[serde(default)]
    pub policy: StorePolicy,

    /// Optional YAML file with initial rules and blacklist entries
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// Upper bound on `limit` for list operations
    #[serde(default = "default_max_page_limit")]
    pub max_page_limit: usize,
}

fn default_max_page_limit() -> usize {
    Page::MAX_LIMIT
}

impl EngineConfig {
    pub fn new() -> Self {
        Self {
            policy: StorePolicy::default(),
            seed_file: None,
            max_page_limit: default_max_page_limit(),
        }
    }

    pub fn with_policy(mut self, policy: StorePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_seed_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_file = Some(path.into());
        self
    }

    pub fn with_max_page_limit(mut self, limit: usize) -> Self {
        self.max_page_limit = limit;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
