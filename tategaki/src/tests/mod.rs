// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scenario tests exercising the crate through its public surface.

mod test_layout;
mod test_serialize;

use styled_runs::{CharStyle, RichContent};

use crate::layout::TextDefaults;
use crate::measure::HeuristicMetrics;

/// All scenario tests run with the `String` brush.
pub(crate) type Content = RichContent<String>;
pub(crate) type Style = CharStyle<String>;

pub(crate) const METRICS: HeuristicMetrics = HeuristicMetrics;

/// Defaults every layout test assumes: 28px glyphs in 42px cells, 30px
/// columns.
pub(crate) fn defaults() -> TextDefaults {
    TextDefaults {
        font_family: String::from("serif"),
        font_size: 28.0,
        line_height: 1.5,
        letter_spacing: 2.0,
    }
}

pub(crate) fn plain(text: &str) -> Content {
    Content::plain(text, Style::new())
}

pub(crate) fn assert_near(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}
