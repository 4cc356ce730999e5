//! ShieldEngine - the operations the admin console calls
//!
//! The engine only composes the stores, matcher and stats projection. Every
//! operation is all-or-nothing: a failed add or delete leaves no trace.

use crate::config::EngineConfig;
use crate::error::Result;
use callshield_core::{BlacklistEntry, MatchResult, NewBlacklistEntry, NewRule, Rule, Stats};
use callshield_runtime::{
    BlacklistStore, CallCounters, MatchEngine, Page, RuleSnapshot, RuleStore, StatsAggregator,
    StatsRecorder,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Rule matching and risk scoring engine
pub struct ShieldEngine {
    config: EngineConfig,
    rules: RuleStore,
    blacklist: BlacklistStore,
    counters: Arc<CallCounters>,
}

impl ShieldEngine {
    pub(crate) fn new(
        config: EngineConfig,
        rules: RuleStore,
        blacklist: BlacklistStore,
        counters: Arc<CallCounters>,
    ) -> Self {
        Self {
            config,
            rules,
            blacklist,
            counters,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ========== Rules ==========

    pub fn list_rules(&self, page: Page) -> Vec<Rule> {
        let rules = self.rules.list(page.capped(self.config.max_page_limit));
        debug!("Listed {} rules (skip={})", rules.len(), page.skip);
        rules
    }

    pub fn add_rule(&self, new_rule: NewRule) -> Result<Rule> {
        let rule = self.rules.add(new_rule)?;
        info!(
            "Rule {} added: keyword='{}' risk_level={} action={}",
            rule.rule_id, rule.keyword, rule.risk_level, rule.action
        );
        Ok(rule)
    }

    pub fn delete_rule(&self, rule_id: u64) -> Result<()> {
        let rule = self.rules.delete(rule_id)?;
        info!("Rule {} deleted: keyword='{}'", rule.rule_id, rule.keyword);
        Ok(())
    }

    /// Current rule set, for callers that match several texts consistently
    pub fn rule_snapshot(&self) -> Arc<RuleSnapshot> {
        self.rules.snapshot()
    }

    // ========== Blacklist ==========

    pub fn list_blacklist(&self, page: Page) -> Vec<BlacklistEntry> {
        let entries = self.blacklist.list(page.capped(self.config.max_page_limit));
        debug!("Listed {} blacklist entries (skip={})", entries.len(), page.skip);
        entries
    }

    pub fn add_blacklist(&self, new_entry: NewBlacklistEntry) -> Result<BlacklistEntry> {
        let entry = self.blacklist.add(new_entry)?;
        info!(
            "Number {} blacklisted (id={}, source={}, risk_level={})",
            entry.number, entry.id, entry.source, entry.risk_level
        );
        Ok(entry)
    }

    pub fn delete_blacklist(&self, id: u64) -> Result<()> {
        let entry = self.blacklist.delete(id)?;
        info!("Number {} removed from blacklist (id={})", entry.number, entry.id);
        Ok(())
    }

    /// Blacklist lookup for an inbound caller number
    pub fn screen_number(&self, number: &str) -> Option<BlacklistEntry> {
        let hit = self.blacklist.lookup(number);
        if let Some(entry) = &hit {
            warn!(
                "Blacklisted number {} screened (id={}, risk_level={})",
                entry.number, entry.id, entry.risk_level
            );
        }
        hit
    }

    // ========== Stats ==========

    pub fn stats(&self) -> Stats {
        StatsAggregator::collect(&self.counters, &self.rules, &self.blacklist)
    }

    /// Counter handle for the call-handling pipeline
    pub fn recorder(&self) -> StatsRecorder {
        StatsRecorder::new(Arc::clone(&self.counters))
    }

    // ========== Matching ==========

    /// Match text against the rule set as of the start of the call
    pub fn test_match(&self, text: &str) -> MatchResult {
        let snapshot = self.rules.snapshot();
        let result = MatchEngine::evaluate(text, &snapshot);

        if result.is_hit() {
            warn!(
                "Risk rule hit: {:?} (risk_level={}, action={})",
                result.hit_keywords, result.risk_level, result.action
            );
        }
        result
    }
}
