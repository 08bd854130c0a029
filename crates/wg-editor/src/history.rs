//! Undo history.
//!
//! A plain stack of board snapshots. Only adding a word records a snapshot
//! (the board as it was *before* the add); resizing, dragging and deleting
//! never do, so undo only ever reverts adds. There is no redo stack.

use wg_core::WordTag;

pub struct UndoHistory {
    snapshots: Vec<Vec<WordTag>>,
    /// Maximum number of snapshots kept. `None` = unbounded.
    limit: Option<usize>,
}

impl UndoHistory {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            snapshots: Vec::new(),
            limit,
        }
    }

    /// Record a snapshot, dropping the oldest one past the limit.
    pub fn push(&mut self, snapshot: Vec<WordTag>) {
        self.snapshots.push(snapshot);
        if let Some(limit) = self.limit
            && self.snapshots.len() > limit
        {
            self.snapshots.remove(0);
        }
    }

    /// Take the most recent snapshot.
    pub fn pop(&mut self) -> Option<Vec<WordTag>> {
        self.snapshots.pop()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// Oldest first.
    pub fn snapshots(&self) -> &[Vec<WordTag>] {
        &self.snapshots
    }
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new(None)
    }
}
