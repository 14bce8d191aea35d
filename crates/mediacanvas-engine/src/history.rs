//! Bounded undo/redo history.

use std::collections::VecDeque;

use mediacanvas_core::constants::DEFAULT_MAX_HISTORY;

use crate::commands::CanvasCommand;
use crate::object_store::ObjectStore;

/// Ordered commands plus a cursor.
///
/// The first `applied` entries are done; the rest form the redo branch.
/// Executing a new command drops the redo branch. When the list grows past
/// `max_depth` the oldest entry is evicted and its captured state released.
#[derive(Debug, Clone)]
pub struct CommandHistory {
    entries: VecDeque<CanvasCommand>,
    applied: usize,
    max_depth: usize,
}

impl CommandHistory {
    /// Creates a history holding at most `max_depth` (at least 1) entries.
    pub fn new(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            entries: VecDeque::with_capacity(max_depth.min(DEFAULT_MAX_HISTORY)),
            applied: 0,
            max_depth,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Runs `command` against `store` and records it.
    pub fn execute(&mut self, command: CanvasCommand, store: &mut ObjectStore) {
        self.entries.truncate(self.applied);
        command.execute(store);
        tracing::debug!(command = command.name(), "executed");
        self.entries.push_back(command);
        self.applied += 1;

        while self.entries.len() > self.max_depth {
            if let Some(evicted) = self.entries.pop_front() {
                tracing::trace!(command = evicted.name(), "evicted from history");
            }
            self.applied -= 1;
        }
    }

    /// Reverts the most recent applied command. `false` when there is none.
    pub fn undo(&mut self, store: &mut ObjectStore) -> bool {
        if self.applied == 0 {
            return false;
        }
        self.applied -= 1;
        let command = &self.entries[self.applied];
        command.undo(store);
        tracing::debug!(command = command.name(), "undone");
        true
    }

    /// Re-applies the next command on the redo branch. `false` when empty.
    pub fn redo(&mut self, store: &mut ObjectStore) -> bool {
        let Some(command) = self.entries.get(self.applied) else {
            return false;
        };
        command.execute(store);
        tracing::debug!(command = command.name(), "redone");
        self.applied += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    pub fn can_redo(&self) -> bool {
        self.applied < self.entries.len()
    }

    /// Index of the last applied command, `None` when nothing can be undone.
    pub fn current_index(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    pub fn undo_depth(&self) -> usize {
        self.applied
    }

    pub fn redo_depth(&self) -> usize {
        self.entries.len() - self.applied
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn undo_label(&self) -> Option<&'static str> {
        self.current_index().map(|i| self.entries[i].name())
    }

    pub fn redo_label(&self) -> Option<&'static str> {
        self.entries.get(self.applied).map(CanvasCommand::name)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.applied = 0;
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}
