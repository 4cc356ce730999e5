//! Copy-on-write snapshot publication
//!
//! Readers take an `Arc` to the currently published version without locking
//! and keep it for as long as they need. Writers serialize on a mutex, build
//! the next version from a private copy and publish it with a single atomic
//! pointer swap. A reader holding an older version never observes a later
//! write.

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::sync::Arc;

/// One immutable published version of a collection
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    /// Monotonically increasing publication counter, starting at 0
    pub version: u64,

    /// Items in insertion order
    pub items: Vec<T>,
}

impl<T> Snapshot<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

/// Holder of the latest published snapshot
pub struct SnapshotCell<T> {
    current: ArcSwap<Snapshot<T>>,
    write_lock: Mutex<()>,
}

impl<T: Clone> SnapshotCell<T> {
    /// Create a cell publishing `items` as version 0
    pub fn new(items: Vec<T>) -> Self {
        Self {
            current: ArcSwap::from_pointee(Snapshot { version: 0, items }),
            write_lock: Mutex::new(()),
        }
    }

    /// Current snapshot; never blocks on writers
    pub fn load(&self) -> Arc<Snapshot<T>> {
        self.current.load_full()
    }

    /// Apply a mutation and publish the result
    ///
    /// The closure works on a private copy of the current items. If it
    /// returns an error nothing is published, so callers see either the whole
    /// change or none of it.
    pub fn update<R, E, F>(&self, mutate: F) -> std::result::Result<R, E>
    where
        F: FnOnce(&mut Vec<T>) -> std::result::Result<R, E>,
    {
        let _guard = self.write_lock.lock();
        let current = self.current.load_full();

        let mut items = current.items.clone();
        let output = mutate(&mut items)?;

        self.current.store(Arc::new(Snapshot {
            version: current.version + 1,
            items,
        }));
        Ok(output)
    }
}

impl<T: Clone> Default for SnapshotCell<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
