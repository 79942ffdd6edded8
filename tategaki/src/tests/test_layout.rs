// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flow-layout scenarios in both directions.

use styled_runs::StyledRun;

use super::{assert_near, defaults, plain, Content, Style, METRICS};
use crate::layout::{Layout, LayoutMode};

fn vertical(content: &Content, avail_height: f32) -> Layout<String> {
    Layout::build(
        content,
        &defaults(),
        LayoutMode::Vertical,
        1000.0,
        avail_height,
        0.0,
        0.0,
        &METRICS,
    )
}

fn horizontal(content: &Content, avail_width: f32) -> Layout<String> {
    Layout::build(
        content,
        &defaults(),
        LayoutMode::Horizontal,
        avail_width,
        1000.0,
        0.0,
        0.0,
        &METRICS,
    )
}

#[test]
fn one_cell_per_character_including_newlines() {
    let layout = vertical(&plain("ab\ncd"), 1000.0);
    assert_eq!(layout.len(), 5);
    assert!(layout.cells()[2].is_newline);
    assert_eq!(layout.cells()[2].ch, '\n');
}

#[test]
fn vertical_wrap_breaks_columns_at_the_height_limit() {
    // 42px cells against a 100px column: two cells fit (84), a third
    // would overflow (126), so five characters land as 2 + 2 + 1.
    let layout = vertical(&plain("一二三四五"), 100.0);
    let columns: Vec<f32> = layout.cells().iter().map(|cell| cell.x).collect();
    assert_eq!(columns, [0.0, 0.0, 30.0, 30.0, 60.0]);

    let ys: Vec<f32> = layout.cells().iter().map(|cell| cell.y).collect();
    assert_eq!(ys, [0.0, 42.0, 0.0, 42.0, 0.0]);

    // Three 30px columns; the tallest column is two cells.
    assert_near(f64::from(layout.width()), 90.0);
    assert_near(f64::from(layout.height()), 84.0);
}

#[test]
fn vertical_columns_paint_right_to_left() {
    let layout = vertical(&plain("一二三四五"), 100.0);
    // Internal x grows left to right; the rects mirror it.
    let first = layout.cell_rect(0);
    let last = layout.cell_rect(4);
    assert_near(first.x0, 60.0);
    assert_near(last.x0, 0.0);
    assert!(first.x0 > last.x0);
}

#[test]
fn oversized_cell_still_lands_alone_on_its_line() {
    // A 42px cell against a 10px limit: no line may stay empty, so each
    // character takes a column of its own.
    let layout = vertical(&plain("永字"), 10.0);
    assert_eq!(layout.cells()[0].x, 0.0);
    assert_eq!(layout.cells()[1].x, 30.0);
    assert_eq!(layout.cells()[0].y, 0.0);
    assert_eq!(layout.cells()[1].y, 0.0);
}

#[test]
fn newline_breaks_the_column_without_advancing_flow() {
    let layout = vertical(&plain("一\n二"), 1000.0);
    // The placeholder sits at the break position in the first column.
    let newline = layout.cells()[1];
    assert!(newline.is_newline);
    assert_eq!(newline.x, 0.0);
    assert_near(f64::from(newline.y), 42.0);
    // The character after it starts a fresh column at the top.
    assert_near(f64::from(layout.cells()[2].x), 30.0);
    assert_eq!(layout.cells()[2].y, 0.0);
}

#[test]
fn blank_line_reserves_a_column() {
    let layout = vertical(&plain("一\n\n二"), 1000.0);
    // Three columns: the empty middle line still takes 30px.
    assert_near(f64::from(layout.width()), 90.0);
    assert_near(f64::from(layout.cells()[3].x), 60.0);
}

#[test]
fn horizontal_wrap_uses_measured_advances() {
    // ASCII advance 16.8 + 2 spacing = 18.8: two fit in 40, not three.
    let layout = horizontal(&plain("abc"), 40.0);
    let rows: Vec<f32> = layout.cells().iter().map(|cell| cell.y).collect();
    assert_eq!(rows, [0.0, 0.0, 42.0]);
    assert_near(f64::from(layout.cells()[1].x), 18.8);
    assert_near(f64::from(layout.height()), 84.0);
    assert_near(f64::from(layout.width()), 37.6);
}

#[test]
fn horizontal_mixes_half_and_full_width() {
    let layout = horizontal(&plain("a永"), 1000.0);
    assert_near(f64::from(layout.cells()[0].width), 18.8);
    assert_near(f64::from(layout.cells()[1].width), 30.0);
    assert_near(f64::from(layout.cells()[1].x), 18.8);
}

#[test]
fn width_constraint_fixes_the_box_but_not_the_totals() {
    let layout = Layout::<String>::build(
        &plain("一二"),
        &defaults(),
        LayoutMode::Vertical,
        1000.0,
        1000.0,
        200.0,
        0.0,
        &METRICS,
    );
    assert_near(f64::from(layout.width()), 30.0);
    assert_near(f64::from(layout.box_width()), 200.0);
    // The single column sits on the box's right edge.
    assert_near(layout.cell_rect(0).x1, 200.0);
}

#[test]
fn height_constraint_replaces_the_available_height() {
    // The element wraps at its own constraint even with more room below.
    let layout = Layout::<String>::build(
        &plain("一二三四五"),
        &defaults(),
        LayoutMode::Vertical,
        1000.0,
        1000.0,
        0.0,
        100.0,
        &METRICS,
    );
    assert_near(f64::from(layout.width()), 90.0);
    assert_near(f64::from(layout.box_height()), 100.0);
}

#[test]
fn styles_are_deduplicated_across_runs() {
    let bold = Style {
        font_weight: Some(styled_runs::FontWeight::Bold),
        ..Style::new()
    };
    let content = Content::from_runs(vec![
        StyledRun::new("一", Style::new()),
        StyledRun::new("二", bold.clone()),
        StyledRun::new("三", Style::new()),
        StyledRun::new("四", bold),
    ]);
    let layout = vertical(&content, 1000.0);
    assert_eq!(layout.styles().len(), 2);
    let indices: Vec<usize> = layout.cells().iter().map(|cell| cell.style_index).collect();
    assert_eq!(indices, [0, 1, 0, 1]);
}

#[test]
fn per_run_font_size_changes_cell_geometry() {
    let big = Style {
        font_size: Some(56.0),
        ..Style::new()
    };
    let content = Content::from_runs(vec![
        StyledRun::new("小", Style::new()),
        StyledRun::new("大", big),
    ]);
    let layout = vertical(&content, 1000.0);
    assert_near(f64::from(layout.cells()[0].height), 42.0);
    assert_near(f64::from(layout.cells()[1].height), 84.0);
    // The shared column is as wide as its widest cell.
    assert_near(f64::from(layout.cells()[0].line_extent), 58.0);
    assert_near(f64::from(layout.cells()[1].line_extent), 58.0);
}

#[test]
fn glyph_origin_centers_narrow_glyphs_in_the_column() {
    let big = Style {
        font_size: Some(56.0),
        ..Style::new()
    };
    let content = Content::from_runs(vec![
        StyledRun::new("大", big),
        StyledRun::new("小", Style::new()),
    ]);
    let layout = vertical(&content, 1000.0);
    // Column width 58; the 30px cell floats (58 - 30) / 2 = 14 in.
    let band = layout.cell_rect(1);
    let origin = layout.glyph_origin(1);
    assert_near(origin.x - band.x0, 14.0);
    // The band itself is never centered.
    assert_near(band.x1 - band.x0, 58.0);
}

#[test]
fn empty_content_lays_out_empty() {
    let layout = vertical(&Content::new(), 1000.0);
    assert!(layout.is_empty());
    assert_eq!(layout.width(), 0.0);
    assert_eq!(layout.height(), 0.0);
}
