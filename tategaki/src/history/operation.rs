// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_runs::{Brush, RichContent};
use tracing::debug;

use crate::document::Document;
use crate::editor::SelectionState;
use crate::element::{DrawMode, Element, ElementId};

/// A partial snapshot of an element's history-tracked fields.
///
/// Only the fields a tool actually changed are present, so an update
/// operation stores two small patches instead of two full element clones
/// (a text element's fragments can dwarf everything else). The struct is
/// closed: a field a tool can mutate but a patch cannot carry fails to
/// exist rather than silently not restoring.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ElementPatch<B: Brush> {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub constraint_width: Option<f32>,
    pub constraint_height: Option<f32>,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub content: Option<RichContent<B>>,
    pub border_color: Option<String>,
    pub border_width: Option<f32>,
    pub draw_mode: Option<DrawMode>,
}

impl<B: Brush> ElementPatch<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot position only (a move).
    pub fn position_of(element: &Element<B>) -> Self {
        let (x, y) = element.position();
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Snapshot the whole frame (a resize): position, size, and for text
    /// the layout constraints the resize writes.
    pub fn frame_of(element: &Element<B>) -> Self {
        let (x, y) = element.position();
        let (width, height) = element.size();
        let mut patch = Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            ..Self::default()
        };
        if let Element::Text(text) = element {
            let (cw, ch) = text.constraints();
            patch.constraint_width = Some(cw);
            patch.constraint_height = Some(ch);
        }
        patch
    }

    /// Snapshot the text content (a styling or retype edit).
    pub fn content_of(element: &Element<B>) -> Self {
        let mut patch = Self::default();
        if let Element::Text(text) = element {
            patch.content = Some(text.content().clone());
        }
        patch
    }

    /// Assign every present field onto `element`. Fields that do not apply
    /// to the element's variant are ignored.
    pub fn apply_to(&self, element: &mut Element<B>) {
        let (mut x, mut y) = element.position();
        if let Some(px) = self.x {
            x = px;
        }
        if let Some(py) = self.y {
            y = py;
        }
        element.set_position(x, y);

        match element {
            Element::Text(text) => {
                let (mut width, mut height) = text.size();
                if let Some(w) = self.width {
                    width = w;
                }
                if let Some(h) = self.height {
                    height = h;
                }
                text.set_size(width, height);

                if self.constraint_width.is_some() || self.constraint_height.is_some() {
                    let (cw, ch) = text.constraints();
                    text.set_constraints(
                        self.constraint_width.unwrap_or(cw),
                        self.constraint_height.unwrap_or(ch),
                    );
                }
                if let Some(family) = &self.font_family {
                    text.set_font_family(family.clone());
                }
                if let Some(size) = self.font_size {
                    text.set_font_size(size);
                }
                if let Some(content) = &self.content {
                    text.set_content(content.clone());
                }
            }
            Element::Image(image) => {
                let (mut width, mut height) = image.size();
                if let Some(w) = self.width {
                    width = w;
                }
                if let Some(h) = self.height {
                    height = h;
                }
                image.set_size(width, height);

                if let Some(color) = &self.border_color {
                    image.set_border_color(color.clone());
                }
                if let Some(width) = self.border_width {
                    image.set_border_width(width);
                }
                if let Some(mode) = self.draw_mode {
                    image.set_draw_mode(mode);
                }
            }
        }
    }
}

/// One reversible edit.
///
/// `Add` and `Remove` own a deep copy of the element taken when the
/// operation was recorded; `Update` carries before/after patches. Undoing
/// or redoing against a document where the target id has vanished is a
/// silent no-op: history must never take the editor down.
#[derive(Clone, PartialEq, Debug)]
pub enum Operation<B: Brush> {
    Add {
        element: Element<B>,
    },
    Remove {
        element: Element<B>,
    },
    Update {
        id: ElementId,
        old: ElementPatch<B>,
        new: ElementPatch<B>,
    },
}

impl<B: Brush> Operation<B> {
    pub fn undo(&self, document: &mut Document<B>, selection: &mut SelectionState) {
        match self {
            Self::Add { element } => remove_element(document, selection, element.id()),
            Self::Remove { element } => add_element(document, selection, element),
            Self::Update { id, old, .. } => update_element(document, id, old),
        }
    }

    pub fn redo(&self, document: &mut Document<B>, selection: &mut SelectionState) {
        match self {
            Self::Add { element } => add_element(document, selection, element),
            Self::Remove { element } => remove_element(document, selection, element.id()),
            Self::Update { id, new, .. } => update_element(document, id, new),
        }
    }
}

fn add_element<B: Brush>(
    document: &mut Document<B>,
    selection: &mut SelectionState,
    element: &Element<B>,
) {
    let mut restored = element.clone();
    restored.set_selected(true);
    selection.select(restored.id().to_owned());
    document.add(restored);
}

fn remove_element<B: Brush>(document: &mut Document<B>, selection: &mut SelectionState, id: &str) {
    if document.remove(id).is_none() {
        debug!(id, "history removal skipped, element already gone");
    }
    selection.clear();
}

fn update_element<B: Brush>(document: &mut Document<B>, id: &str, patch: &ElementPatch<B>) {
    match document.get_mut(id) {
        Some(element) => patch.apply_to(element),
        None => debug!(id, "history update skipped, element missing"),
    }
}
