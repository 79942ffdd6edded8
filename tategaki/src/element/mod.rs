// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The things that sit on the paper.

mod image;
mod text;

pub use image::{ImageElement, ImageState};
pub use text::TextElement;

use peniko::kurbo::Rect;
use serde::{Deserialize, Serialize};
use styled_runs::Brush;

/// Stable identity of an element within a document.
pub type ElementId = String;

/// How an image is fitted into its box.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Stretch to the box, ignoring aspect ratio.
    Fill,
    /// Scale to cover the box, cropping the overflow.
    #[default]
    Cover,
    /// Letterbox inside the box, preserving aspect ratio.
    Contain,
}

/// A placed element: every variant this editor can ever hold.
///
/// Consumers match exhaustively, so adding a variant is a compile-time
/// sweep of every site that needs to care.
#[derive(Clone, PartialEq, Debug)]
pub enum Element<B: Brush> {
    Text(TextElement<B>),
    Image(ImageElement),
}

impl<B: Brush> Element<B> {
    pub fn id(&self) -> &str {
        match self {
            Self::Text(text) => text.id(),
            Self::Image(image) => image.id(),
        }
    }

    /// Top-left corner in canvas coordinates.
    pub fn position(&self) -> (f32, f32) {
        match self {
            Self::Text(text) => text.position(),
            Self::Image(image) => image.position(),
        }
    }

    /// Last-known box size. For text this is what the most recent
    /// `measure` computed.
    pub fn size(&self) -> (f32, f32) {
        match self {
            Self::Text(text) => text.size(),
            Self::Image(image) => image.size(),
        }
    }

    /// Axis-aligned bounds in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        let (x, y) = self.position();
        let (width, height) = self.size();
        Rect::new(
            f64::from(x),
            f64::from(y),
            f64::from(x + width),
            f64::from(y + height),
        )
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        match self {
            Self::Text(text) => text.set_position(x, y),
            Self::Image(image) => image.set_position(x, y),
        }
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        let (x, y) = self.position();
        self.set_position(x + dx, y + dy);
    }

    pub fn selected(&self) -> bool {
        match self {
            Self::Text(text) => text.selected(),
            Self::Image(image) => image.selected(),
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        match self {
            Self::Text(text) => text.set_selected(selected),
            Self::Image(image) => image.set_selected(selected),
        }
    }

    pub fn as_text(&self) -> Option<&TextElement<B>> {
        match self {
            Self::Text(text) => Some(text),
            Self::Image(_) => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextElement<B>> {
        match self {
            Self::Text(text) => Some(text),
            Self::Image(_) => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageElement> {
        match self {
            Self::Text(_) => None,
            Self::Image(image) => Some(image),
        }
    }

    pub fn as_image_mut(&mut self) -> Option<&mut ImageElement> {
        match self {
            Self::Text(_) => None,
            Self::Image(image) => Some(image),
        }
    }
}

impl<B: Brush> From<TextElement<B>> for Element<B> {
    fn from(text: TextElement<B>) -> Self {
        Self::Text(text)
    }
}

impl<B: Brush> From<ImageElement> for Element<B> {
    fn from(image: ImageElement) -> Self {
        Self::Image(image)
    }
}
