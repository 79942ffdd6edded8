// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::{Rect, Vec2};
use styled_runs::{Brush, CharStyle, RichContent};

use crate::layout::cache::{LayoutKey, LruCache};
use crate::layout::cursor::{Cursor, Selection};
use crate::layout::{Layout, LayoutMode, TextDefaults};
use crate::measure::CharMetrics;

use super::ElementId;

/// Layouts kept per element; one per recently seen `(mode, area)`.
const LAYOUT_CACHE_SIZE: usize = 4;

/// A block of styled text placed on the paper.
///
/// Content mutation only happens through setters that bump the element's
/// revision counter, which is what keys the layout cache. The element's
/// `width`/`height` are outputs of layout, not inputs: they track the last
/// measured bounding box so canvas hit-testing can use plain rectangles.
#[derive(Debug)]
pub struct TextElement<B: Brush> {
    id: ElementId,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    selected: bool,
    content: RichContent<B>,
    defaults: TextDefaults,
    /// Reflow width; `0` means unconstrained (hug content).
    constraint_width: f32,
    /// Reflow height; `0` means unconstrained (hug content).
    constraint_height: f32,
    revision: u64,
    cache: LruCache<Layout<B>>,
}

impl<B: Brush> Clone for TextElement<B> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            content: self.content.clone(),
            defaults: self.defaults.clone(),
            // The clone recomputes layouts on demand.
            cache: LruCache::new(LAYOUT_CACHE_SIZE),
            ..*self
        }
    }
}

impl<B: Brush> PartialEq for TextElement<B> {
    fn eq(&self, other: &Self) -> bool {
        // The cache and revision are bookkeeping, not state.
        self.id == other.id
            && self.x == other.x
            && self.y == other.y
            && self.width == other.width
            && self.height == other.height
            && self.content == other.content
            && self.defaults == other.defaults
            && self.constraint_width == other.constraint_width
            && self.constraint_height == other.constraint_height
    }
}

impl<B: Brush> TextElement<B> {
    pub fn new(id: impl Into<ElementId>, x: f32, y: f32, defaults: TextDefaults) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width: 0.0,
            height: 0.0,
            selected: false,
            content: RichContent::new(),
            defaults,
            constraint_width: 0.0,
            constraint_height: 0.0,
            revision: 0,
            cache: LruCache::new(LAYOUT_CACHE_SIZE),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Position does not affect layout (cells are element-local), so this
    /// does not invalidate the cache.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Restore a recorded box size without touching layout state.
    pub(crate) fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn content(&self) -> &RichContent<B> {
        &self.content
    }

    pub fn text(&self) -> String {
        self.content.text()
    }

    pub fn char_len(&self) -> usize {
        self.content.char_len()
    }

    pub fn defaults(&self) -> &TextDefaults {
        &self.defaults
    }

    pub fn font_family(&self) -> &str {
        &self.defaults.font_family
    }

    pub fn font_size(&self) -> f32 {
        self.defaults.font_size
    }

    pub fn constraints(&self) -> (f32, f32) {
        (self.constraint_width, self.constraint_height)
    }

    fn bump(&mut self) {
        self.revision += 1;
        // Old-revision entries can never hit again; drop them eagerly.
        self.cache.clear();
    }

    /// Replace the whole content with a single plainly styled run. Typed
    /// input goes through here, so retyping discards per-character styling.
    pub fn set_plain_text(&mut self, text: impl Into<String>) {
        self.content.replace_with_plain(text, CharStyle::new());
        self.bump();
    }

    /// Replace the content with prebuilt runs (document load, undo).
    pub fn set_content(&mut self, content: RichContent<B>) {
        self.content = content;
        self.bump();
    }

    /// Style the character range `[start, end)`. Clamped; empty ranges are
    /// a no-op (and do not bump the revision).
    pub fn apply_style(&mut self, start: usize, end: usize, patch: &CharStyle<B>) {
        let len = self.content.char_len();
        if start.min(len) >= end.min(len) {
            return;
        }
        self.content.apply_style(start, end, patch);
        self.bump();
    }

    pub fn style_at(&self, index: usize) -> Option<CharStyle<B>> {
        self.content.style_at(index)
    }

    /// The effective style shared by `[start, end)`: runs are resolved
    /// against this element's typing defaults before intersecting, so an
    /// explicit attribute and an inherited equal one agree.
    pub fn common_style(&self, start: usize, end: usize) -> Option<CharStyle<B>> {
        let base = CharStyle {
            font_family: Some(self.defaults.font_family.clone()),
            font_size: Some(self.defaults.font_size),
            ..CharStyle::default()
        };
        self.content.common_style(start, end, &base)
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.defaults.font_family = family.into();
        self.bump();
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.defaults.font_size = size;
        self.bump();
    }

    /// Set reflow constraints; `0` clears an axis back to hug-content.
    pub fn set_constraints(&mut self, width: f32, height: f32) {
        self.constraint_width = width.max(0.0);
        self.constraint_height = height.max(0.0);
        self.bump();
    }

    /// The layout of this element's content inside the available area.
    ///
    /// Cached: recomputes only when the revision, mode or area changed
    /// since a recent identical call.
    pub fn layout(
        &mut self,
        mode: LayoutMode,
        avail_width: f32,
        avail_height: f32,
        metrics: &dyn CharMetrics,
    ) -> &Layout<B> {
        let key = LayoutKey::new(self.revision, mode, avail_width, avail_height);
        self.cache.entry(key, || {
            Layout::build(
                &self.content,
                &self.defaults,
                mode,
                avail_width,
                avail_height,
                self.constraint_width,
                self.constraint_height,
                metrics,
            )
        })
    }

    /// Lay out and refresh the element's bounding box.
    ///
    /// A constrained axis keeps its constraint; an unconstrained axis hugs
    /// the computed total. Returns the resulting `(width, height)`.
    pub fn measure(
        &mut self,
        mode: LayoutMode,
        avail_width: f32,
        avail_height: f32,
        metrics: &dyn CharMetrics,
    ) -> (f32, f32) {
        let (width, height) = {
            let layout = self.layout(mode, avail_width, avail_height, metrics);
            (layout.box_width(), layout.box_height())
        };
        self.width = width;
        self.height = height;
        (width, height)
    }

    /// The character under a canvas-space point, or `None` on a miss.
    pub fn char_index_at(
        &mut self,
        x: f32,
        y: f32,
        mode: LayoutMode,
        avail_width: f32,
        avail_height: f32,
        metrics: &dyn CharMetrics,
    ) -> Option<usize> {
        let local_x = x - self.x;
        let local_y = y - self.y;
        let layout = self.layout(mode, avail_width, avail_height, metrics);
        Cursor::from_point(layout, local_x, local_y).map(|cursor| cursor.index)
    }

    /// Canvas-space caret rect for the position before character `index`.
    pub fn caret_rect(
        &mut self,
        index: usize,
        mode: LayoutMode,
        avail_width: f32,
        avail_height: f32,
        metrics: &dyn CharMetrics,
    ) -> Rect {
        let offset = Vec2::new(f64::from(self.x), f64::from(self.y));
        let layout = self.layout(mode, avail_width, avail_height, metrics);
        Cursor::new(index).geometry(layout) + offset
    }

    /// Canvas-space highlight rects for the characters in `[start, end)`.
    pub fn rects_for_range(
        &mut self,
        start: usize,
        end: usize,
        mode: LayoutMode,
        avail_width: f32,
        avail_height: f32,
        metrics: &dyn CharMetrics,
    ) -> Vec<Rect> {
        let offset = Vec2::new(f64::from(self.x), f64::from(self.y));
        let layout = self.layout(mode, avail_width, avail_height, metrics);
        Selection::new(start, end)
            .geometry(layout)
            .into_iter()
            .map(|rect| rect + offset)
            .collect()
    }
}
