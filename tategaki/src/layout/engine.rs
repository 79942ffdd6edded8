// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flow algorithms behind [`Layout::build`](super::Layout::build).
//!
//! Both directions share the same shape: cells accumulate into the current
//! line, a line flushes when the next cell would overflow the area limit
//! (never flushing an empty line, so an oversized cell still lands), and a
//! newline emits a placeholder cell then forces a flush. The flush stamps
//! the finished line's shared extent onto its cells.

use styled_runs::{Brush, RichContent};

use super::{Cell, ResolvedStyle, TextDefaults};
use crate::measure::CharMetrics;

fn style_index<B: Brush>(styles: &mut Vec<ResolvedStyle<B>>, style: ResolvedStyle<B>) -> usize {
    match styles.iter().position(|existing| *existing == style) {
        Some(index) => index,
        None => {
            styles.push(style);
            styles.len() - 1
        }
    }
}

struct LineFlow {
    cells: Vec<Cell>,
    line_start: usize,
    /// In-flow position within the current line.
    flow_pos: f32,
    /// Cross-flow position of the current line's leading edge.
    cross_pos: f32,
    /// Running extent of the current line (column width / row height).
    line_extent: f32,
    /// Longest flushed line, in the flow direction.
    max_run: f32,
    /// Flow-direction limit that triggers a flush.
    limit: f32,
}

impl LineFlow {
    fn new(limit: f32) -> Self {
        Self {
            cells: Vec::new(),
            line_start: 0,
            flow_pos: 0.0,
            cross_pos: 0.0,
            line_extent: 0.0,
            max_run: 0.0,
            limit,
        }
    }

    fn flush(&mut self) {
        for cell in &mut self.cells[self.line_start..] {
            cell.line_extent = self.line_extent;
        }
        self.cross_pos += self.line_extent;
        self.max_run = self.max_run.max(self.flow_pos);
        self.flow_pos = 0.0;
        self.line_extent = 0.0;
        self.line_start = self.cells.len();
    }

    /// `(cells, cross_total, flow_total)` after flushing the last line.
    fn finish(mut self) -> (Vec<Cell>, f32, f32) {
        self.flush();
        (self.cells, self.cross_pos, self.max_run)
    }
}

/// Vertical flow: `cross_pos` is x (column edge), `flow_pos` is y. The x
/// stored here is pre-mirroring; `Layout::cell_rect` applies the
/// right-to-left correction.
pub(super) fn flow_vertical<B: Brush>(
    content: &RichContent<B>,
    defaults: &TextDefaults,
    max_height: f32,
) -> (Vec<Cell>, Vec<ResolvedStyle<B>>, f32, f32) {
    let mut styles: Vec<ResolvedStyle<B>> = Vec::new();
    let mut flow = LineFlow::new(max_height);

    for run in content.runs() {
        let resolved = ResolvedStyle::resolve(&run.style, defaults);
        let cell_h = resolved.font_size * defaults.line_height;
        let cell_w = resolved.font_size + defaults.letter_spacing;
        let index = style_index(&mut styles, resolved);

        for ch in run.text.chars() {
            if ch == '\n' {
                // The placeholder keeps one cell per character but does not
                // advance the column, so an empty line contributes only the
                // column width it reserves.
                if flow.line_extent == 0.0 {
                    flow.line_extent = cell_w;
                }
                flow.cells.push(Cell {
                    ch,
                    x: flow.cross_pos,
                    y: flow.flow_pos,
                    width: cell_w,
                    height: cell_h,
                    line_extent: 0.0,
                    style_index: index,
                    is_newline: true,
                });
                flow.flush();
                continue;
            }

            if flow.flow_pos + cell_h > flow.limit && flow.flow_pos > 0.0 {
                flow.flush();
            }
            flow.cells.push(Cell {
                ch,
                x: flow.cross_pos,
                y: flow.flow_pos,
                width: cell_w,
                height: cell_h,
                line_extent: 0.0,
                style_index: index,
                is_newline: false,
            });
            flow.flow_pos += cell_h;
            flow.line_extent = flow.line_extent.max(cell_w);
        }
    }

    let (cells, total_width, total_height) = flow.finish();
    (cells, styles, total_width, total_height)
}

/// Horizontal flow: `cross_pos` is y, `flow_pos` is x. Unlike vertical mode
/// the advance is per character, supplied by the measurement seam.
pub(super) fn flow_horizontal<B: Brush>(
    content: &RichContent<B>,
    defaults: &TextDefaults,
    max_width: f32,
    metrics: &dyn CharMetrics,
) -> (Vec<Cell>, Vec<ResolvedStyle<B>>, f32, f32) {
    let mut styles: Vec<ResolvedStyle<B>> = Vec::new();
    let mut flow = LineFlow::new(max_width);

    for run in content.runs() {
        let resolved = ResolvedStyle::resolve(&run.style, defaults);
        let font_size = resolved.font_size;
        let font_family = resolved.font_family.clone();
        let cell_h = font_size * defaults.line_height;
        let index = style_index(&mut styles, resolved);

        for ch in run.text.chars() {
            if ch == '\n' {
                if flow.line_extent == 0.0 {
                    flow.line_extent = cell_h;
                }
                // Sized like a full-width space so the caret after a newline
                // has somewhere to stand.
                let cell_w = font_size + defaults.letter_spacing;
                flow.cells.push(Cell {
                    ch,
                    x: flow.flow_pos,
                    y: flow.cross_pos,
                    width: cell_w,
                    height: cell_h,
                    line_extent: 0.0,
                    style_index: index,
                    is_newline: true,
                });
                flow.flush();
                continue;
            }

            let cell_w = metrics.advance(ch, font_size, &font_family) + defaults.letter_spacing;
            if flow.flow_pos + cell_w > flow.limit && flow.flow_pos > 0.0 {
                flow.flush();
            }
            flow.cells.push(Cell {
                ch,
                x: flow.flow_pos,
                y: flow.cross_pos,
                width: cell_w,
                height: cell_h,
                line_extent: 0.0,
                style_index: index,
                is_newline: false,
            });
            flow.flow_pos += cell_w;
            flow.line_extent = flow.line_extent.max(cell_h);
        }
    }

    let (cells, total_height, total_width) = flow.finish();
    (cells, styles, total_width, total_height)
}
