//! Blacklisted phone number store

use super::{IdSequence, Page, StorePolicy};
use crate::error::Result;
use crate::snapshot::{Snapshot, SnapshotCell};
use callshield_core::types::blacklist::normalize_number;
use callshield_core::{BlacklistEntry, CoreError, NewBlacklistEntry};
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

pub type BlacklistSnapshot = Snapshot<BlacklistEntry>;

/// Owner of all blacklist entries
pub struct BlacklistStore {
    cell: SnapshotCell<BlacklistEntry>,
    ids: IdSequence,
    policy: StorePolicy,
}

impl BlacklistStore {
    pub fn new(policy: StorePolicy) -> Self {
        Self {
            cell: SnapshotCell::default(),
            ids: IdSequence::new("blacklist entry"),
            policy,
        }
    }

    pub fn snapshot(&self) -> Arc<BlacklistSnapshot> {
        self.cell.load()
    }

    pub fn list(&self, page: Page) -> Vec<BlacklistEntry> {
        page.apply(&self.snapshot().items)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find the first entry for a number
    ///
    /// Malformed numbers can never be blacklisted, so they simply miss.
    pub fn lookup(&self, number: &str) -> Option<BlacklistEntry> {
        let number = normalize_number(number).ok()?;
        self.snapshot()
            .iter()
            .find(|e| e.number == number)
            .cloned()
    }

    /// Validate and append an entry; `created_at` is assigned here
    pub fn add(&self, new_entry: NewBlacklistEntry) -> Result<BlacklistEntry> {
        let (number, _) = new_entry.validate()?;

        let unique_numbers = self.policy.unique_numbers;
        let entry = self.cell.update(|entries| -> Result<BlacklistEntry> {
            if unique_numbers && entries.iter().any(|e| e.number == number) {
                return Err(
                    CoreError::Conflict(format!("number '{}' is already blacklisted", number))
                        .into(),
                );
            }

            let entry = new_entry.into_entry(self.ids.next_id()?, Utc::now())?;
            entries.push(entry.clone());
            Ok(entry)
        })?;

        debug!(id = entry.id, number = %entry.number, source = %entry.source, "blacklist entry stored");
        Ok(entry)
    }

    pub fn delete(&self, id: u64) -> Result<BlacklistEntry> {
        let removed = self.cell.update(|entries| -> Result<BlacklistEntry> {
            let pos = entries
                .iter()
                .position(|e| e.id == id)
                .ok_or_else(|| CoreError::not_found("blacklist entry", id))?;
            Ok(entries.remove(pos))
        })?;

        debug!(id, "blacklist entry removed");
        Ok(removed)
    }
}

impl Default for BlacklistStore {
    fn default() -> Self {
        Self::new(StorePolicy::default())
    }
}
