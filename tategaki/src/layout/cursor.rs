// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between pixels and character indices.
//!
//! Everything here works in element-local coordinates on top of
//! [`Layout::cell_rect`], so hit-testing, the caret and selection
//! highlights agree with each other in both flow directions.

use peniko::kurbo::Rect;
use styled_runs::Brush;

use super::{Layout, LayoutMode};

/// Caret bar thickness in logical pixels.
const CARET_THICKNESS: f64 = 2.0;

/// A position in a layout's logical character order.
///
/// `index` ranges over `0..=layout.len()`; the top value is the position
/// after the last character.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct Cursor {
    pub index: usize,
}

impl Cursor {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// The cursor at the element-local point, or `None` when the point
    /// misses every cell.
    ///
    /// Cells are tested with their full line-extent band, so a click
    /// anywhere across a mixed-size column (or row) selects the character
    /// at that flow position. First containing band wins.
    pub fn from_point<B: Brush>(layout: &Layout<B>, x: f32, y: f32) -> Option<Self> {
        let (x, y) = (f64::from(x), f64::from(y));
        (0..layout.len())
            .find(|&index| {
                let rect = layout.cell_rect(index);
                x >= rect.x0 && x <= rect.x1 && y >= rect.y0 && y <= rect.y1
            })
            .map(Self::new)
    }

    /// The caret rect for this cursor: a thin bar on the leading edge of
    /// the cell at `index`, crossing the flow direction.
    ///
    /// `index == layout.len()` puts the bar on the trailing edge of the
    /// last cell. For empty content the bar sits where the first typed
    /// character would land: the top-left corner, except vertical mode
    /// with a width constraint, which starts at the right edge.
    pub fn geometry<B: Brush>(&self, layout: &Layout<B>) -> Rect {
        if layout.is_empty() {
            let font_size = f64::from(layout.default_font_size());
            return match layout.mode() {
                LayoutMode::Vertical => {
                    let x = if layout.constraint_width() > 0.0 {
                        f64::from(layout.constraint_width()) - font_size
                    } else {
                        0.0
                    };
                    Rect::new(x, 0.0, x + font_size, CARET_THICKNESS)
                }
                LayoutMode::Horizontal => {
                    let height = font_size * f64::from(layout.default_line_height());
                    Rect::new(0.0, 0.0, CARET_THICKNESS, height)
                }
            };
        }

        let index = self.index.min(layout.len());
        if index < layout.len() {
            let rect = layout.cell_rect(index);
            match layout.mode() {
                LayoutMode::Vertical => {
                    Rect::new(rect.x0, rect.y0, rect.x1, rect.y0 + CARET_THICKNESS)
                }
                LayoutMode::Horizontal => {
                    Rect::new(rect.x0, rect.y0, rect.x0 + CARET_THICKNESS, rect.y1)
                }
            }
        } else {
            // Past the end: the trailing edge of the last cell.
            let rect = layout.cell_rect(layout.len() - 1);
            match layout.mode() {
                LayoutMode::Vertical => {
                    Rect::new(rect.x0, rect.y1, rect.x1, rect.y1 + CARET_THICKNESS)
                }
                LayoutMode::Horizontal => {
                    Rect::new(rect.x1, rect.y0, rect.x1 + CARET_THICKNESS, rect.y1)
                }
            }
        }
    }
}

/// An anchor/focus pair of character indices.
///
/// The anchor is where the drag started; the focus follows the pointer and
/// may sit on either side of the anchor.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct Selection {
    pub anchor: usize,
    pub focus: usize,
}

impl Selection {
    pub fn new(anchor: usize, focus: usize) -> Self {
        Self { anchor, focus }
    }

    /// A caret-like selection with both ends at `index`.
    pub fn collapsed(index: usize) -> Self {
        Self::new(index, index)
    }

    /// Move the focus, keeping the anchor.
    pub fn extend(&mut self, focus: usize) {
        self.focus = focus;
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    /// `(start, end)` with `start <= end`.
    pub fn normalized(&self) -> (usize, usize) {
        if self.anchor <= self.focus {
            (self.anchor, self.focus)
        } else {
            (self.focus, self.anchor)
        }
    }

    /// Highlight rects for the characters in `[start, end)`, one band per
    /// character. The range is clamped to the layout; an empty clamped
    /// range yields no rects.
    pub fn geometry<B: Brush>(&self, layout: &Layout<B>) -> Vec<Rect> {
        let (start, end) = self.normalized();
        let start = start.min(layout.len());
        let end = end.min(layout.len());
        (start..end).map(|index| layout.cell_rect(index)).collect()
    }
}
