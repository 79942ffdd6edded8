// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::element::ElementId;

/// What is currently selected.
///
/// `text_range` is an anchor/focus pair of **inclusive** character boxes
/// inside the selected text element, in drag order (the focus may precede
/// the anchor). Exclusive-range consumers normalize and add one to the end.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct SelectionState {
    pub selected_id: Option<ElementId>,
    pub text_range: Option<(usize, usize)>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an element, dropping any character selection.
    pub fn select(&mut self, id: ElementId) {
        self.selected_id = Some(id);
        self.text_range = None;
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
        self.text_range = None;
    }

    /// The character range as ordered inclusive endpoints.
    pub fn normalized_range(&self) -> Option<(usize, usize)> {
        self.text_range
            .map(|(anchor, focus)| (anchor.min(focus), anchor.max(focus)))
    }

    pub fn is_caret(&self) -> bool {
        matches!(self.text_range, Some((anchor, focus)) if anchor == focus)
    }
}
