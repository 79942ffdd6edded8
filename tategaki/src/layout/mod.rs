// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid layout of styled text into positioned character cells.
//!
//! Text flows in one of two directions: vertical (characters top to bottom,
//! columns right to left) or horizontal (characters left to right, rows top
//! to bottom). Layout is pure: the same content, defaults, mode and area
//! always produce the same cells, which is what makes the per-element cache
//! in [`cache`] sound.

pub(crate) mod cache;
mod engine;

pub mod cursor;

use peniko::kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use styled_runs::{Brush, CharStyle, FontSlant, FontWeight, RichContent};

use crate::measure::CharMetrics;

/// Flow direction for text layout.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Top-to-bottom characters in right-to-left columns.
    #[default]
    Vertical,
    /// Left-to-right characters in top-to-bottom rows.
    Horizontal,
}

/// Element-level defaults filled in where a run's sparse style is silent.
#[derive(Clone, PartialEq, Debug)]
pub struct TextDefaults {
    pub font_family: String,
    /// Font size in logical pixels.
    pub font_size: f32,
    /// Multiplier on font size giving the cell's flow-direction extent.
    pub line_height: f32,
    /// Extra advance between cells, in logical pixels.
    pub letter_spacing: f32,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            font_family: String::from("serif"),
            font_size: 28.0,
            line_height: 1.5,
            letter_spacing: 2.0,
        }
    }
}

/// A run style with every attribute resolved against the element defaults.
///
/// Cells reference these by index so a layout carries one per distinct
/// style rather than one per character.
#[derive(Clone, PartialEq, Debug)]
pub struct ResolvedStyle<B: Brush> {
    pub font_family: String,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub font_slant: FontSlant,
    /// Text color; the brush default when the run does not set one.
    pub color: B,
    pub background: Option<B>,
    pub underline: bool,
    pub strikethrough: bool,
}

impl<B: Brush> ResolvedStyle<B> {
    pub(crate) fn resolve(style: &CharStyle<B>, defaults: &TextDefaults) -> Self {
        Self {
            font_family: style
                .font_family
                .clone()
                .unwrap_or_else(|| defaults.font_family.clone()),
            font_size: style.font_size.unwrap_or(defaults.font_size),
            font_weight: style.font_weight.unwrap_or_default(),
            font_slant: style.font_slant.unwrap_or_default(),
            color: style.color.clone().unwrap_or_default(),
            background: style.background.clone(),
            underline: style.underline.unwrap_or(false),
            strikethrough: style.strikethrough.unwrap_or(false),
        }
    }
}

/// One laid-out character.
///
/// `x`/`y` are in internal flow coordinates: for vertical mode `x` grows
/// with each successive column even though columns are painted right to
/// left. [`Layout::cell_rect`] is the only place that correction happens.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Cell {
    pub ch: char,
    pub x: f32,
    pub y: f32,
    /// Nominal advance width (vertical: cross-flow; horizontal: in-flow).
    pub width: f32,
    /// Nominal cell height (font size times line height).
    pub height: f32,
    /// Shared extent of the cell's line: column width in vertical mode,
    /// row height in horizontal mode.
    pub line_extent: f32,
    pub style_index: usize,
    /// Placeholder cell emitted for a `'\n'`; painters skip it.
    pub is_newline: bool,
}

/// The positioned cells of one text element under one mode and area.
#[derive(Clone, PartialEq, Debug)]
pub struct Layout<B: Brush> {
    cells: Vec<Cell>,
    styles: Vec<ResolvedStyle<B>>,
    width: f32,
    height: f32,
    mode: LayoutMode,
    constraint_width: f32,
    constraint_height: f32,
    default_font_size: f32,
    default_line_height: f32,
}

impl<B: Brush> Layout<B> {
    /// Lay `content` out inside `(avail_width, avail_height)`.
    ///
    /// A positive layout constraint replaces the corresponding available
    /// dimension and fixes the bounding box on that axis; otherwise the box
    /// hugs the computed totals.
    pub fn build(
        content: &RichContent<B>,
        defaults: &TextDefaults,
        mode: LayoutMode,
        avail_width: f32,
        avail_height: f32,
        constraint_width: f32,
        constraint_height: f32,
        metrics: &dyn CharMetrics,
    ) -> Self {
        let max_width = if constraint_width > 0.0 {
            constraint_width
        } else {
            avail_width
        };
        let max_height = if constraint_height > 0.0 {
            constraint_height
        } else {
            avail_height
        };
        let (cells, styles, width, height) = match mode {
            LayoutMode::Vertical => engine::flow_vertical(content, defaults, max_height),
            LayoutMode::Horizontal => engine::flow_horizontal(content, defaults, max_width, metrics),
        };
        Self {
            cells,
            styles,
            width,
            height,
            mode,
            constraint_width,
            constraint_height,
            default_font_size: defaults.font_size,
            default_line_height: defaults.line_height,
        }
    }

    /// The cells in logical character order, one per character including
    /// newlines.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The distinct resolved styles referenced by `Cell::style_index`.
    pub fn styles(&self) -> &[ResolvedStyle<B>] {
        &self.styles
    }

    /// Number of cells (equals the logical character count).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Computed content width (vertical: sum of column widths).
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Computed content height (horizontal: sum of row heights).
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Bounding-box width: the width constraint when set, else the total.
    pub fn box_width(&self) -> f32 {
        if self.constraint_width > 0.0 {
            self.constraint_width
        } else {
            self.width
        }
    }

    /// Bounding-box height: the height constraint when set, else the total.
    pub fn box_height(&self) -> f32 {
        if self.constraint_height > 0.0 {
            self.constraint_height
        } else {
            self.height
        }
    }

    pub(crate) fn constraint_width(&self) -> f32 {
        self.constraint_width
    }

    pub(crate) fn default_font_size(&self) -> f32 {
        self.default_font_size
    }

    pub(crate) fn default_line_height(&self) -> f32 {
        self.default_line_height
    }

    /// The element-local band rect of the cell at `index`.
    ///
    /// Vertical mode mirrors the internal x here, and only here:
    /// `x = box_width - (cell.x + cell.line_extent)`. The band spans the
    /// whole line extent so a click anywhere in a mixed-size column or row
    /// resolves to the character at that flow position; caret, selection
    /// and hit-test geometry all share this rect, which keeps them
    /// consistent by construction.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn cell_rect(&self, index: usize) -> Rect {
        let cell = &self.cells[index];
        match self.mode {
            LayoutMode::Vertical => {
                let x = self.box_width() - (cell.x + cell.line_extent);
                Rect::new(
                    f64::from(x),
                    f64::from(cell.y),
                    f64::from(x + cell.line_extent),
                    f64::from(cell.y + cell.height),
                )
            }
            LayoutMode::Horizontal => Rect::new(
                f64::from(cell.x),
                f64::from(cell.y),
                f64::from(cell.x + cell.width),
                f64::from(cell.y + cell.line_extent),
            ),
        }
    }

    /// Where the painter should place the glyph of the cell at `index`.
    ///
    /// Centers a narrow glyph within its column (vertical) or a short glyph
    /// within its row (horizontal). Centering lives here rather than in
    /// [`Self::cell_rect`] so interactive geometry never drifts from the
    /// band the pointer actually hits.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn glyph_origin(&self, index: usize) -> Point {
        let cell = &self.cells[index];
        let rect = self.cell_rect(index);
        match self.mode {
            LayoutMode::Vertical => {
                let mut x = rect.x0;
                if cell.width < cell.line_extent {
                    x += f64::from((cell.line_extent - cell.width) / 2.0);
                }
                Point::new(x, rect.y0)
            }
            LayoutMode::Horizontal => {
                let mut y = rect.y0;
                if cell.height < cell.line_extent {
                    y += f64::from((cell.line_extent - cell.height) / 2.0);
                }
                Point::new(rect.x0, y)
            }
        }
    }
}
