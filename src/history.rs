//! Linear undo/redo log of editor snapshots.
//!
//! The log is bounded and never branches: recording while the cursor sits below the tail drops
//! every entry after the cursor. Capturing and re-rendering state is delegated to the caller
//! through [`SnapshotProvider`] and [`RestoreTarget`], so the log never sees UI internals.

pub(crate) mod snapshot;

use std::collections::VecDeque;

use crate::foundation::error::{EditorError, EditorResult};

pub use snapshot::{Capture, Preview, Snapshot};

/// Entries kept before the oldest is evicted.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Captures the current editor state on demand.
pub trait SnapshotProvider {
    fn capture(&self) -> EditorResult<Capture>;
}

/// Applies a snapshot back onto the editor.
pub trait RestoreTarget {
    fn restore(&mut self, snapshot: &Snapshot) -> EditorResult<()>;
}

/// Bounded linear history with a cursor on the current entry.
#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<Snapshot>,
    cursor: Option<usize>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: None,
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl History {
    /// Create an empty history keeping at most `capacity` entries.
    pub fn new(capacity: usize) -> EditorResult<Self> {
        if capacity == 0 {
            return Err(EditorError::validation("history capacity must be >= 1"));
        }
        Ok(Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY) + 1),
            cursor: None,
            capacity,
        })
    }

    /// Capture the current state and append it as the new current entry.
    ///
    /// Provider errors propagate and leave the log untouched.
    pub fn record<P>(&mut self, description: impl Into<String>, provider: &P) -> EditorResult<&Snapshot>
    where
        P: SnapshotProvider + ?Sized,
    {
        let snapshot = Snapshot::new(provider.capture()?, description);

        if let Some(c) = self.cursor {
            self.entries.truncate(c + 1);
        }
        self.entries.push_back(snapshot);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }

        let cursor = self.entries.len() - 1;
        self.cursor = Some(cursor);
        tracing::debug!(
            description = self.entries[cursor].description(),
            cursor,
            len = self.entries.len(),
            "history recorded"
        );
        Ok(&self.entries[cursor])
    }

    /// Step back one entry and restore it. Returns `false` when there is nothing to undo.
    pub fn undo<T>(&mut self, target: &mut T) -> EditorResult<bool>
    where
        T: RestoreTarget + ?Sized,
    {
        let Some(c) = self.cursor.filter(|&c| c > 0) else {
            return Ok(false);
        };
        self.cursor = Some(c - 1);
        target.restore(&self.entries[c - 1])?;
        Ok(true)
    }

    /// Step forward one entry and restore it. Returns `false` when there is nothing to redo.
    pub fn redo<T>(&mut self, target: &mut T) -> EditorResult<bool>
    where
        T: RestoreTarget + ?Sized,
    {
        let Some(c) = self.cursor.filter(|&c| c + 1 < self.entries.len()) else {
            return Ok(false);
        };
        self.cursor = Some(c + 1);
        target.restore(&self.entries[c + 1])?;
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Index of the current entry, `None` while empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.cursor.map(|c| &self.entries[c])
    }

    pub fn entries(&self) -> impl ExactSizeIterator<Item = &Snapshot> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}

#[cfg(test)]
#[path = "../tests/unit/history/log.rs"]
mod tests;
