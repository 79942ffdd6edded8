// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};

use crate::Brush;

/// Weight of a glyph's strokes.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Slant of a glyph.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

/// A sparse set of visual attributes for a run of characters.
///
/// Every attribute is optional; a missing attribute means "inherit the
/// owning element's default". Two styles are equal when they agree on the
/// presence *and* value of every attribute.
#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharStyle<B: Brush> {
    /// Text color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<B>,
    /// Font size in logical pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Font family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Stroke weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    /// Slant.
    #[serde(rename = "fontStyle", skip_serializing_if = "Option::is_none")]
    pub font_slant: Option<FontSlant>,
    /// Highlighter background color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<B>,
    /// Underline decoration (a side line in vertical flow).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    /// Strikethrough decoration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
}

impl<B: Brush> CharStyle<B> {
    /// A style with no attributes set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no attribute is set.
    pub fn is_plain(&self) -> bool {
        self.color.is_none()
            && self.font_size.is_none()
            && self.font_family.is_none()
            && self.font_weight.is_none()
            && self.font_slant.is_none()
            && self.background.is_none()
            && self.underline.is_none()
            && self.strikethrough.is_none()
    }

    /// Shallow-merge `patch` onto `self`: attributes present in `patch`
    /// overwrite, absent ones survive.
    pub fn merge(&mut self, patch: &Self) {
        if patch.color.is_some() {
            self.color = patch.color.clone();
        }
        if patch.font_size.is_some() {
            self.font_size = patch.font_size;
        }
        if patch.font_family.is_some() {
            self.font_family = patch.font_family.clone();
        }
        if patch.font_weight.is_some() {
            self.font_weight = patch.font_weight;
        }
        if patch.font_slant.is_some() {
            self.font_slant = patch.font_slant;
        }
        if patch.background.is_some() {
            self.background = patch.background.clone();
        }
        if patch.underline.is_some() {
            self.underline = patch.underline;
        }
        if patch.strikethrough.is_some() {
            self.strikethrough = patch.strikethrough;
        }
    }

    /// Drop every attribute on which `self` and `other` disagree.
    ///
    /// Folding a set of styles through this yields their common subset,
    /// which UI controls surface as "indeterminate" for mixed selections.
    pub fn retain_common(&mut self, other: &Self) {
        if self.color != other.color {
            self.color = None;
        }
        if self.font_size != other.font_size {
            self.font_size = None;
        }
        if self.font_family != other.font_family {
            self.font_family = None;
        }
        if self.font_weight != other.font_weight {
            self.font_weight = None;
        }
        if self.font_slant != other.font_slant {
            self.font_slant = None;
        }
        if self.background != other.background {
            self.background = None;
        }
        if self.underline != other.underline {
            self.underline = None;
        }
        if self.strikethrough != other.strikethrough {
            self.strikethrough = None;
        }
    }
}
