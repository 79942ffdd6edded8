// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded undo/redo over batches of operations.

mod operation;

pub use operation::{ElementPatch, Operation};

use std::collections::VecDeque;

use styled_runs::Brush;

use crate::document::Document;
use crate::editor::SelectionState;

/// Operations recorded as one user-visible edit, undone and redone
/// together.
pub type Batch<B> = Vec<Operation<B>>;

/// Oldest entries fall off once the undo stack is this deep.
const MAX_DEPTH: usize = 100;

/// The undo/redo stacks.
#[derive(Clone, Default, Debug)]
pub struct History<B: Brush> {
    undo: VecDeque<Batch<B>>,
    redo: VecDeque<Batch<B>>,
}

impl<B: Brush> History<B> {
    pub fn new() -> Self {
        Self {
            undo: VecDeque::new(),
            redo: VecDeque::new(),
        }
    }

    /// Record a batch. Empty batches are ignored; any recorded batch
    /// invalidates the redo stack.
    pub fn push(&mut self, batch: Batch<B>) {
        if batch.is_empty() {
            return;
        }
        self.undo.push_back(batch);
        self.redo.clear();
        if self.undo.len() > MAX_DEPTH {
            self.undo.pop_front();
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Undo the most recent batch, applying inverses in reverse order so
    /// dependent operations unwind correctly. Returns `false` when there
    /// is nothing to undo.
    pub fn undo(&mut self, document: &mut Document<B>, selection: &mut SelectionState) -> bool {
        let Some(batch) = self.undo.pop_back() else {
            return false;
        };
        for op in batch.iter().rev() {
            op.undo(document, selection);
        }
        self.redo.push_back(batch);
        true
    }

    /// Redo the most recently undone batch, in original order.
    pub fn redo(&mut self, document: &mut Document<B>, selection: &mut SelectionState) -> bool {
        let Some(batch) = self.redo.pop_back() else {
            return false;
        };
        for op in &batch {
            op.redo(document, selection);
        }
        self.undo.push_back(batch);
        true
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Current undo depth, for tests and diagnostics.
    pub fn depth(&self) -> usize {
        self.undo.len()
    }
}
