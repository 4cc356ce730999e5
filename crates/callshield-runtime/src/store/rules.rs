//! Keyword rule store

use super::{IdSequence, Page, StorePolicy};
use crate::error::Result;
use crate::snapshot::{Snapshot, SnapshotCell};
use callshield_core::{CoreError, NewRule, Rule};
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

/// Point-in-time view of the rule set handed to the matcher
pub type RuleSnapshot = Snapshot<Rule>;

/// Owner of all keyword rules
pub struct RuleStore {
    cell: SnapshotCell<Rule>,
    ids: IdSequence,
    policy: StorePolicy,
}

impl RuleStore {
    pub fn new(policy: StorePolicy) -> Self {
        Self {
            cell: SnapshotCell::default(),
            ids: IdSequence::new("rule"),
            policy,
        }
    }

    /// Current immutable rule set
    pub fn snapshot(&self) -> Arc<RuleSnapshot> {
        self.cell.load()
    }

    /// Rules in insertion order, windowed by `page`
    pub fn list(&self, page: Page) -> Vec<Rule> {
        page.apply(&self.snapshot().items)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, rule_id: u64) -> Option<Rule> {
        self.snapshot()
            .iter()
            .find(|r| r.rule_id == rule_id)
            .cloned()
    }

    /// Validate and append a rule, returning it as stored
    pub fn add(&self, new_rule: NewRule) -> Result<Rule> {
        new_rule.validate()?;

        let unique_keywords = self.policy.unique_keywords;
        let rule = self.cell.update(|rules| -> Result<Rule> {
            if unique_keywords && rules.iter().any(|r| r.keyword == new_rule.keyword) {
                return Err(CoreError::Conflict(format!(
                    "keyword '{}' already exists",
                    new_rule.keyword
                ))
                .into());
            }

            let rule = new_rule.into_rule(self.ids.next_id()?, Utc::now())?;
            rules.push(rule.clone());
            Ok(rule)
        })?;

        debug!(rule_id = rule.rule_id, keyword = %rule.keyword, "rule stored");
        Ok(rule)
    }

    /// Remove a rule by id, returning the removed rule
    pub fn delete(&self, rule_id: u64) -> Result<Rule> {
        let removed = self.cell.update(|rules| -> Result<Rule> {
            let pos = rules
                .iter()
                .position(|r| r.rule_id == rule_id)
                .ok_or_else(|| CoreError::not_found("rule", rule_id))?;
            Ok(rules.remove(pos))
        })?;

        debug!(rule_id, "rule removed");
        Ok(removed)
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::new(StorePolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;
    use callshield_core::RuleAction;

    #[test]
    fn test_add_then_list() {
        let store = RuleStore::default();
        let rule = store.add(NewRule::new("安全账户", 5, "block")).unwrap();

        let rules = store.list(Page::default());
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0], rule);
        assert_eq!(rules[0].action, RuleAction::Block);
    }

    #[test]
    fn test_ids_are_unique_and_not_reused() {
        let store = RuleStore::default();
        let a = store.add(NewRule::new("a", 1, "alert")).unwrap();
        let b = store.add(NewRule::new("b", 1, "alert")).unwrap();
        store.delete(b.rule_id).unwrap();
        let c = store.add(NewRule::new("c", 1, "alert")).unwrap();

        assert_ne!(a.rule_id, b.rule_id);
        assert_ne!(b.rule_id, c.rule_id);
        assert!(c.rule_id > b.rule_id);
    }

    #[test]
    fn test_invalid_add_leaves_store_unchanged() {
        let store = RuleStore::default();
        store.add(NewRule::new("验证码", 3, "alert")).unwrap();
        let version = store.snapshot().version;

        for bad in [
            NewRule::new("", 3, "alert"),
            NewRule::new("x", 0, "alert"),
            NewRule::new("x", 6, "alert"),
            NewRule::new("x", 3, "drop"),
        ] {
            let err = store.add(bad).unwrap_err();
            assert!(matches!(err, RuntimeError::Core(CoreError::Validation(_))));
        }

        assert_eq!(store.len(), 1);
        assert_eq!(store.snapshot().version, version);
    }

    #[test]
    fn test_duplicate_keyword_conflict() {
        let store = RuleStore::default();
        store.add(NewRule::new("转账", 3, "alert")).unwrap();

        let err = store.add(NewRule::new("转账", 5, "block")).unwrap_err();
        assert!(matches!(err, RuntimeError::Core(CoreError::Conflict(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_keyword_allowed_when_policy_off() {
        let store = RuleStore::new(StorePolicy {
            unique_keywords: false,
            ..StorePolicy::default()
        });
        store.add(NewRule::new("转账", 3, "alert")).unwrap();
        store.add(NewRule::new("转账", 5, "block")).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_unknown_is_not_found() {
        let store = RuleStore::default();
        store.add(NewRule::new("a", 1, "alert")).unwrap();

        for _ in 0..2 {
            let err = store.delete(999).unwrap_err();
            assert!(matches!(
                err,
                RuntimeError::Core(CoreError::NotFound { id: 999, .. })
            ));
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_removes_rule() {
        let store = RuleStore::default();
        let rule = store.add(NewRule::new("a", 1, "alert")).unwrap();

        let removed = store.delete(rule.rule_id).unwrap();
        assert_eq!(removed.rule_id, rule.rule_id);
        assert!(store.is_empty());
        assert!(store.get(rule.rule_id).is_none());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = RuleStore::default();
        for kw in ["c", "a", "b"] {
            store.add(NewRule::new(kw, 2, "alert")).unwrap();
        }

        let keywords: Vec<_> = store
            .list(Page::all())
            .into_iter()
            .map(|r| r.keyword)
            .collect();
        assert_eq!(keywords, vec!["c", "a", "b"]);
    }
}
