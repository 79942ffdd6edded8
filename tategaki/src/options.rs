// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

use crate::layout::{LayoutMode, TextDefaults};

/// Ruled-guide styles drawn behind the paper.
///
/// Painting the guides is the host's job; the kind and paint parameters
/// travel with the document so a reload reproduces the same sheet.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridKind {
    /// Blank paper.
    #[default]
    None,
    /// Column (or row) rules only.
    Line,
    /// Full genkō-yōshi squares.
    Grid,
}

/// Guide-line appearance.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridOptions {
    pub kind: GridKind,
    pub color: String,
    pub line_width: f32,
    pub opacity: f32,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            kind: GridKind::None,
            color: String::from("#c0c0c0"),
            line_width: 1.0,
            opacity: 0.4,
        }
    }
}

/// Host-supplied configuration for an editor instance.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorOptions {
    /// Paper width in logical pixels.
    pub width: f32,
    /// Paper height in logical pixels.
    pub height: f32,
    /// Inset from the paper edge to the text area.
    pub padding: f32,
    /// Flow direction for every text element on the paper.
    pub mode: LayoutMode,
    /// Default font family for new text.
    pub font_family: String,
    /// Default font size for new text.
    pub font_size: f32,
    pub grid: GridOptions,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 60.0,
            mode: LayoutMode::Vertical,
            font_family: String::from("serif"),
            font_size: 28.0,
            grid: GridOptions::default(),
        }
    }
}

impl EditorOptions {
    /// The element-level text defaults these options imply.
    pub fn text_defaults(&self) -> TextDefaults {
        TextDefaults {
            font_family: self.font_family.clone(),
            font_size: self.font_size,
            ..TextDefaults::default()
        }
    }

    /// The area available to text content, after padding.
    pub fn content_size(&self) -> (f32, f32) {
        (
            (self.width - 2.0 * self.padding).max(0.0),
            (self.height - 2.0 * self.padding).max(0.0),
        )
    }
}
