// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editor façade and its tool state machine.

mod handles;
mod pan;
mod select;
mod selection;
mod tool;

pub use selection::SelectionState;

use peniko::kurbo::Rect;
use serde::de::DeserializeOwned;
use serde::Serialize;
use styled_runs::{Brush, CharStyle};
use tracing::debug;

use crate::document::Document;
use crate::element::{Element, ElementId, ImageElement, TextElement};
use crate::events::{PointerEvent, WheelEvent};
use crate::history::{ElementPatch, History, Operation};
use crate::measure::{CharMetrics, HeuristicMetrics};
use crate::options::EditorOptions;
use crate::serialize::{self, DocumentError};
use crate::viewport::Viewport;

use pan::PanTool;
use select::SelectTool;
use tool::Tool;

/// Monotonic repaint signal.
///
/// Hosts poll the editor's generation after feeding it events: a changed
/// value means something visible changed. This replaces render callbacks,
/// keeping the core free of host hooks.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct Generation(u32);

impl Generation {
    fn nudge(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// The available interaction modes.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub enum ToolKind {
    #[default]
    Select,
    Pan,
}

/// Everything the tools mutate: the shared heart of the editor.
#[derive(Debug)]
pub(crate) struct EditorCore<B: Brush> {
    pub(crate) options: EditorOptions,
    pub(crate) document: Document<B>,
    pub(crate) history: History<B>,
    pub(crate) selection: SelectionState,
    pub(crate) viewport: Viewport,
    generation: Generation,
    metrics: Box<dyn CharMetrics>,
    next_id: u64,
}

impl<B: Brush> EditorCore<B> {
    pub(crate) fn nudge(&mut self) {
        self.generation.nudge();
    }

    fn fresh_id(&mut self, prefix: &str) -> ElementId {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    /// Character index under a canvas-space point within the element
    /// `id`, when it is a text element.
    pub(crate) fn char_index_at(&mut self, id: &str, x: f32, y: f32) -> Option<usize> {
        let mode = self.options.mode;
        let (paper_w, paper_h) = (self.options.width, self.options.height);
        let text = self.document.get_mut(id)?.as_text_mut()?;
        let (ex, ey) = text.position();
        text.char_index_at(
            x,
            y,
            mode,
            (paper_w - ex).max(0.0),
            (paper_h - ey).max(0.0),
            &*self.metrics,
        )
    }

    /// Re-measure every text element's bounding box against the current
    /// options. Cheap when nothing changed: layouts come from the cache.
    pub(crate) fn refresh_sizes(&mut self) {
        let mode = self.options.mode;
        let (paper_w, paper_h) = (self.options.width, self.options.height);
        let metrics = &*self.metrics;
        for element in self.document.iter_mut() {
            if let Element::Text(text) = element {
                let (x, y) = text.position();
                text.measure(mode, (paper_w - x).max(0.0), (paper_h - y).max(0.0), metrics);
            }
        }
    }
}

/// The headless editor.
///
/// The host owns the surface and the event loop; it feeds pointer and
/// wheel events in, calls the mutation operations below in response to UI
/// actions, and polls [`Editor::generation`] to know when to repaint.
#[derive(Debug)]
pub struct Editor<B: Brush> {
    core: EditorCore<B>,
    tool: ToolKind,
    select: SelectTool,
    pan: PanTool,
}

impl<B: Brush> Editor<B> {
    /// An editor with the built-in heuristic text metrics.
    pub fn new(options: EditorOptions) -> Self {
        Self::with_metrics(options, Box::new(HeuristicMetrics))
    }

    /// An editor measuring text through the host's metrics backend.
    pub fn with_metrics(options: EditorOptions, metrics: Box<dyn CharMetrics>) -> Self {
        Self {
            core: EditorCore {
                options,
                document: Document::new(),
                history: History::new(),
                selection: SelectionState::new(),
                viewport: Viewport::default(),
                generation: Generation::default(),
                metrics,
                next_id: 0,
            },
            tool: ToolKind::default(),
            select: SelectTool::default(),
            pan: PanTool::default(),
        }
    }

    pub fn options(&self) -> &EditorOptions {
        &self.core.options
    }

    pub fn document(&self) -> &Document<B> {
        &self.core.document
    }

    pub fn viewport(&self) -> Viewport {
        self.core.viewport
    }

    pub fn selection(&self) -> &SelectionState {
        &self.core.selection
    }

    pub fn generation(&self) -> Generation {
        self.core.generation
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn can_undo(&self) -> bool {
        self.core.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.core.history.can_redo()
    }

    /// Switch the active tool, firing the outgoing tool's `on_disable`
    /// and the incoming tool's `on_enable`. No-op when already active.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool == self.tool {
            return;
        }
        debug!(from = ?self.tool, to = ?tool, "tool switch");
        match self.tool {
            ToolKind::Select => self.select.on_disable(&mut self.core),
            ToolKind::Pan => self.pan.on_disable(&mut self.core),
        }
        self.tool = tool;
        match self.tool {
            ToolKind::Select => self.select.on_enable(&mut self.core),
            ToolKind::Pan => self.pan.on_enable(&mut self.core),
        }
    }

    pub fn pointer_down(&mut self, event: PointerEvent) {
        match self.tool {
            ToolKind::Select => self.select.on_pointer_down(&mut self.core, event),
            ToolKind::Pan => self.pan.on_pointer_down(&mut self.core, event),
        }
    }

    pub fn pointer_move(&mut self, event: PointerEvent) {
        match self.tool {
            ToolKind::Select => self.select.on_pointer_move(&mut self.core, event),
            ToolKind::Pan => self.pan.on_pointer_move(&mut self.core, event),
        }
    }

    pub fn pointer_up(&mut self, event: PointerEvent) {
        match self.tool {
            ToolKind::Select => self.select.on_pointer_up(&mut self.core, event),
            ToolKind::Pan => self.pan.on_pointer_up(&mut self.core, event),
        }
    }

    pub fn wheel(&mut self, event: WheelEvent) {
        match self.tool {
            ToolKind::Select => self.select.on_wheel(&mut self.core, event),
            ToolKind::Pan => self.pan.on_wheel(&mut self.core, event),
        }
    }

    /// Place a new text element, select it, and record its addition.
    pub fn add_text(&mut self, x: f32, y: f32, text: &str) -> ElementId {
        let id = self.core.fresh_id("text");
        let mut element = TextElement::new(id.clone(), x, y, self.core.options.text_defaults());
        element.set_plain_text(text);
        let mut element: Element<B> = element.into();
        element.set_selected(true);
        self.core.document.add(element);
        self.core.selection.select(id.clone());
        self.core.refresh_sizes();
        if let Some(snapshot) = self.core.document.get(&id).cloned() {
            self.core.history.push(vec![Operation::Add { element: snapshot }]);
        }
        self.core.nudge();
        id
    }

    /// Place a new image element, select it, and record its addition.
    ///
    /// A non-positive size means "adopt the natural size once loaded";
    /// see [`ImageElement::mark_loaded`].
    pub fn add_image(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        src: impl Into<String>,
    ) -> ElementId {
        let id = self.core.fresh_id("image");
        let mut element: Element<B> = ImageElement::new(id.clone(), x, y, width, height, src).into();
        element.set_selected(true);
        self.core.document.add(element.clone());
        self.core.selection.select(id.clone());
        self.core.history.push(vec![Operation::Add { element }]);
        self.core.nudge();
        id
    }

    /// Remove the selected element, recording the removal. Returns `false`
    /// when nothing was selected.
    pub fn remove_selected(&mut self) -> bool {
        let Some(id) = self.core.selection.selected_id.clone() else {
            return false;
        };
        let Some(element) = self.core.document.remove(&id) else {
            self.core.selection.clear();
            return false;
        };
        self.core.history.push(vec![Operation::Remove { element }]);
        self.core.selection.clear();
        self.core.nudge();
        true
    }

    /// Drop every element and the selection. History survives, so the
    /// clear itself is not undoable but earlier snapshots still restore.
    pub fn clear(&mut self) {
        self.core.document.clear();
        self.core.selection.clear();
        self.core.nudge();
    }

    pub fn undo(&mut self) -> bool {
        let applied = self
            .core
            .history
            .undo(&mut self.core.document, &mut self.core.selection);
        if applied {
            self.core.refresh_sizes();
            self.core.nudge();
        }
        applied
    }

    pub fn redo(&mut self) -> bool {
        let applied = self
            .core
            .history
            .redo(&mut self.core.document, &mut self.core.selection);
        if applied {
            self.core.refresh_sizes();
            self.core.nudge();
        }
        applied
    }

    /// Single-main-text convenience: replace the whole document with one
    /// text element holding `text`. Bypasses history, like a programmatic
    /// document reset.
    pub fn set_value(&mut self, text: &str) {
        self.core.document.clear();
        let padding = self.core.options.padding;
        let mut element = TextElement::new(
            "main-text",
            padding,
            padding,
            self.core.options.text_defaults(),
        );
        element.set_plain_text(text);
        self.core.document.add(element.into());
        self.core.selection.clear();
        self.core.refresh_sizes();
        self.core.nudge();
    }

    /// The bottom element's text, when it is a text element.
    pub fn get_value(&self) -> String {
        self.core
            .document
            .iter()
            .next()
            .and_then(Element::as_text)
            .map(TextElement::text)
            .unwrap_or_default()
    }

    /// The typed-input path: replace the selected text element's content
    /// with plain text. Not recorded in history, and any per-character
    /// styling of the old content is gone.
    pub fn set_text_content(&mut self, text: &str) {
        let Some(id) = self.core.selection.selected_id.clone() else {
            return;
        };
        let Some(element) = self.core.document.get_mut(&id) else {
            return;
        };
        let Some(text_element) = element.as_text_mut() else {
            return;
        };
        text_element.set_plain_text(text);
        self.core.refresh_sizes();
        self.core.nudge();
    }

    /// Style the selected character range, recording before/after
    /// fragment snapshots. The stored range is inclusive boxes, so the
    /// exclusive end is one past the focus.
    pub fn apply_style_to_selection(&mut self, patch: &CharStyle<B>) {
        let Some(id) = self.core.selection.selected_id.clone() else {
            return;
        };
        let Some((start, end)) = self.core.selection.normalized_range() else {
            return;
        };
        let Some(element) = self.core.document.get_mut(&id) else {
            return;
        };
        if element.as_text().is_none() {
            return;
        }
        let old = ElementPatch::content_of(element);
        if let Some(text) = element.as_text_mut() {
            text.apply_style(start, end + 1, patch);
        }
        let new = ElementPatch::content_of(element);
        self.core.history.push(vec![Operation::Update { id, old, new }]);
        self.core.refresh_sizes();
        self.core.nudge();
    }

    /// Change the font family of the selected range, or of the whole
    /// element (and its typing default) when no range is active.
    pub fn set_font_family(&mut self, family: &str) {
        let Some(id) = self.core.selection.selected_id.clone() else {
            return;
        };
        let range = self.core.selection.normalized_range();
        if matches!(range, Some((start, end)) if start == end) {
            // A bare caret has nothing to style.
            return;
        }
        let Some(element) = self.core.document.get_mut(&id) else {
            return;
        };
        let Some(text) = element.as_text_mut() else {
            return;
        };
        let old = ElementPatch {
            font_family: Some(text.font_family().to_owned()),
            content: Some(text.content().clone()),
            ..ElementPatch::default()
        };
        let patch = CharStyle {
            font_family: Some(family.to_owned()),
            ..CharStyle::default()
        };
        match range {
            Some((start, end)) => text.apply_style(start, end + 1, &patch),
            None => {
                let len = text.char_len();
                text.apply_style(0, len, &patch);
                text.set_font_family(family);
            }
        }
        let new = ElementPatch {
            font_family: Some(text.font_family().to_owned()),
            content: Some(text.content().clone()),
            ..ElementPatch::default()
        };
        self.core.history.push(vec![Operation::Update { id, old, new }]);
        self.core.refresh_sizes();
        self.core.nudge();
    }

    /// The sparse style shared by the selected characters: the caret's
    /// inherited style when collapsed, the common subset otherwise.
    pub fn selection_style(&self) -> Option<CharStyle<B>> {
        let id = self.core.selection.selected_id.as_deref()?;
        let (start, end) = self.core.selection.normalized_range()?;
        let text = self.core.document.get(id)?.as_text()?;
        if start == end {
            text.style_at(start)
        } else {
            text.common_style(start, end + 1)
        }
    }

    /// Canvas-space caret rect, when the selection is a caret in a text
    /// element.
    pub fn caret_rect(&mut self) -> Option<Rect> {
        let id = self.core.selection.selected_id.clone()?;
        let (start, end) = self.core.selection.normalized_range()?;
        if start != end {
            return None;
        }
        let mode = self.core.options.mode;
        let (paper_w, paper_h) = (self.core.options.width, self.core.options.height);
        let text = self.core.document.get_mut(&id)?.as_text_mut()?;
        let (x, y) = text.position();
        Some(text.caret_rect(
            start,
            mode,
            (paper_w - x).max(0.0),
            (paper_h - y).max(0.0),
            &*self.core.metrics,
        ))
    }

    /// Canvas-space highlight rects for a non-collapsed character
    /// selection.
    pub fn selection_rects(&mut self) -> Vec<Rect> {
        let Some(id) = self.core.selection.selected_id.clone() else {
            return Vec::new();
        };
        let Some((start, end)) = self.core.selection.normalized_range() else {
            return Vec::new();
        };
        if start == end {
            return Vec::new();
        }
        let mode = self.core.options.mode;
        let (paper_w, paper_h) = (self.core.options.width, self.core.options.height);
        let Some(text) = self
            .core
            .document
            .get_mut(&id)
            .and_then(Element::as_text_mut)
        else {
            return Vec::new();
        };
        let (x, y) = text.position();
        text.rects_for_range(
            start,
            end + 1,
            mode,
            (paper_w - x).max(0.0),
            (paper_h - y).max(0.0),
            &*self.core.metrics,
        )
    }

    /// Bounds of the selected element, for the host's selection frame.
    pub fn selected_bounds(&self) -> Option<Rect> {
        let id = self.core.selection.selected_id.as_deref()?;
        self.core.document.get(id).map(Element::bounds)
    }

    /// Resolve a finished image load. Safe when the element has since
    /// been removed or is not an image.
    pub fn notify_image_loaded(&mut self, id: &str, natural_width: f32, natural_height: f32) {
        match self.core.document.get_mut(id).and_then(Element::as_image_mut) {
            Some(image) => {
                image.mark_loaded(natural_width, natural_height);
                self.core.nudge();
            }
            None => debug!(id, "load notification for missing image"),
        }
    }

    /// Resolve a failed image load. Safe when the element is gone.
    pub fn notify_image_failed(&mut self, id: &str) {
        match self.core.document.get_mut(id).and_then(Element::as_image_mut) {
            Some(image) => {
                image.mark_failed();
                self.core.nudge();
            }
            None => debug!(id, "failure notification for missing image"),
        }
    }

    /// Replace the editor options (paper size, mode, defaults) and
    /// reflow everything.
    pub fn update_options(&mut self, options: EditorOptions) {
        self.core.options = options;
        self.core.refresh_sizes();
        self.core.nudge();
    }

    /// Serialize the document to the pretty-printed interchange JSON.
    pub fn export_json(&self) -> Result<String, DocumentError>
    where
        B: Serialize,
    {
        serialize::export(&self.core.options, &self.core.document)
    }

    /// Load a document from interchange JSON.
    ///
    /// The payload is parsed and validated completely before any editor
    /// state changes; on error the editor is untouched. A successful load
    /// replaces the document and options and clears selection and history.
    pub fn load_json(&mut self, json: &str) -> Result<(), DocumentError>
    where
        B: DeserializeOwned,
    {
        let (options, document) = serialize::import::<B>(json, &self.core.options)?;
        self.core.options = options;
        self.core.document = document;
        self.core.selection.clear();
        self.core.history.clear();
        self.core.refresh_sizes();
        self.core.nudge();
        Ok(())
    }
}
