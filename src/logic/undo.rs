//! Undo state: the bounded snapshot history and the delete-undo buffer.
//!
//! Both are owned by [`Logic`](super::Logic) and threaded through execution
//! explicitly; they are session-scoped, never persisted.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::core::limits::UNDO_HISTORY_CAPACITY;
use crate::core::{ContactStore, Person};

#[derive(Clone, Debug)]
struct UndoEntry {
    snapshot: ContactStore,
    label: String,
}

/// Bounded stack of labeled pre-mutation snapshots.
///
/// Pushes go on top; beyond capacity the oldest entry is evicted from the
/// bottom, so the stack retains the newest `capacity` labeled mutations.
#[derive(Debug)]
pub struct UndoHistory {
    entries: VecDeque<UndoEntry>,
    capacity: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::with_capacity(UNDO_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "undo history capacity must be positive");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a pre-mutation snapshot under the command's undo label.
    pub fn record(&mut self, snapshot: ContactStore, label: impl Into<String>) {
        self.entries.push_back(UndoEntry {
            snapshot,
            label: label.into(),
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pop the most recent snapshot into `store`, returning its label.
    ///
    /// Returns `None` (and leaves `store` untouched) when the history is
    /// empty.
    pub fn restore_into(&mut self, store: &mut ContactStore) -> Option<String> {
        let entry = self.entries.pop_back()?;
        *store = entry.snapshot;
        Some(entry.label)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Latest batch of persons removed by a delete command.
///
/// Overwritten on every delete, consumed (pop semantics) by undo-delete.
/// Narrower than the snapshot history: it restores records, not the whole
/// store.
#[derive(Debug, Default)]
pub struct DeleteUndoBuffer {
    latest: Option<Vec<Arc<Person>>>,
}

impl DeleteUndoBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffered batch with the just-removed persons.
    pub fn push_batch(&mut self, batch: Vec<Arc<Person>>) {
        self.latest = Some(batch);
    }

    /// Take the buffered batch, leaving the buffer empty.
    pub fn pop_latest(&mut self) -> Option<Vec<Arc<Person>>> {
        self.latest.take()
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }
}
