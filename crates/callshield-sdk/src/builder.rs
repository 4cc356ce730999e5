//! Builder pattern for ShieldEngine

use crate::config::EngineConfig;
use crate::engine::ShieldEngine;
use crate::error::{Result, SdkError};
use crate::seed::SeedData;
use callshield_runtime::{BlacklistStore, CallCounters, RuleStore, StorePolicy};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Builder for ShieldEngine
///
/// # Example
///
/// ```rust,ignore
/// use callshield_sdk::ShieldEngineBuilder;
///
/// let engine = ShieldEngineBuilder::new()
///     .with_seed_file("config/seed.yaml")
///     .build()
///     .await?;
///
/// let result = engine.test_match("请把钱转入安全账户");
/// ```
pub struct ShieldEngineBuilder {
    config: EngineConfig,
    seed_content: Option<String>,
    counters: Option<CallCounters>,
}

impl ShieldEngineBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            seed_content: None,
            counters: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_policy(mut self, policy: StorePolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Load initial data from a YAML file at build time
    pub fn with_seed_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.seed_file = Some(path.into());
        self
    }

    /// Load initial data from YAML content (applied after the seed file)
    pub fn with_seed_content(mut self, content: impl Into<String>) -> Self {
        self.seed_content = Some(content.into());
        self
    }

    /// Start from counters restored by the call-handling pipeline
    pub fn with_counters(mut self, counters: CallCounters) -> Self {
        self.counters = Some(counters);
        self
    }

    pub fn max_page_limit(mut self, limit: usize) -> Self {
        self.config.max_page_limit = limit;
        self
    }

    pub async fn build(self) -> Result<ShieldEngine> {
        if self.config.max_page_limit == 0 {
            return Err(SdkError::ConfigError(
                "max_page_limit must be at least 1".to_string(),
            ));
        }

        let rules = RuleStore::new(self.config.policy);
        let blacklist = BlacklistStore::new(self.config.policy);

        if let Some(path) = &self.config.seed_file {
            let (r, b) = SeedData::from_file(path).await?.apply(&rules, &blacklist)?;
            info!("Loaded seed file {:?}: {} rules, {} blacklist entries", path, r, b);
        }
        if let Some(content) = &self.seed_content {
            let (r, b) = SeedData::from_yaml(content)?.apply(&rules, &blacklist)?;
            info!("Loaded inline seed: {} rules, {} blacklist entries", r, b);
        }

        let counters = Arc::new(self.counters.unwrap_or_default());

        Ok(ShieldEngine::new(self.config, rules, blacklist, counters))
    }
}

impl Default for ShieldEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
