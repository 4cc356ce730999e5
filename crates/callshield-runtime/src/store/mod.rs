//! Rule and blacklist stores
//!
//! Both stores own their entities exclusively and publish every mutation as a
//! new immutable snapshot (see [`crate::snapshot`]).

pub mod blacklist;
pub mod rules;

pub use blacklist::{BlacklistSnapshot, BlacklistStore};
pub use rules::{RuleSnapshot, RuleStore};

use crate::error::{Result, RuntimeError};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Uniqueness policy applied on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorePolicy {
    /// Reject a rule whose keyword is already configured
    #[serde(default = "default_true")]
    pub unique_keywords: bool,

    /// Reject a number that is already blacklisted
    #[serde(default = "default_true")]
    pub unique_numbers: bool,
}

fn default_true() -> bool {
    true
}

impl Default for StorePolicy {
    fn default() -> Self {
        Self {
            unique_keywords: true,
            unique_numbers: true,
        }
    }
}

/// Offset/limit window over a list result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Page {
    pub const DEFAULT_LIMIT: usize = 100;
    pub const MAX_LIMIT: usize = 1000;

    pub fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }

    /// Every item, used by internal callers that must see the whole set
    pub fn all() -> Self {
        Self {
            skip: 0,
            limit: usize::MAX,
        }
    }

    /// Clamp the limit to `max`
    pub fn capped(self, max: usize) -> Self {
        Self {
            skip: self.skip,
            limit: self.limit.min(max),
        }
    }

    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        items.iter().skip(self.skip).take(self.limit).cloned().collect()
    }
}

fn default_limit() -> usize {
    Page::DEFAULT_LIMIT
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: Page::DEFAULT_LIMIT,
        }
    }
}

/// Monotonic identifier source; ids start at 1 and are never reused
pub(crate) struct IdSequence {
    next: AtomicU64,
    kind: &'static str,
}

impl IdSequence {
    pub(crate) fn new(kind: &'static str) -> Self {
        Self {
            next: AtomicU64::new(1),
            kind,
        }
    }

    pub(crate) fn next_id(&self) -> Result<u64> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map_err(|_| RuntimeError::IdExhausted(self.kind))
    }
}
