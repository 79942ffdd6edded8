// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::{debug, warn};

use super::{DrawMode, ElementId};

/// Longest side of an image placed without an explicit size.
const NATURAL_SIZE_LIMIT: f32 = 300.0;

/// Lifecycle of the image resource behind an element.
///
/// Decoding happens in the host; the editor only hears about the outcome.
/// Transitions are one-way: `Pending` to `Loaded` or `Failed`, then stuck.
/// A failed image keeps its box and is painted as a placeholder forever.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub enum ImageState {
    #[default]
    Pending,
    Loaded {
        natural_width: f32,
        natural_height: f32,
    },
    Failed,
}

/// An image placed on the paper.
#[derive(Clone, PartialEq, Debug)]
pub struct ImageElement {
    id: ElementId,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    selected: bool,
    src: String,
    /// Width over height; `1.0` until the image loads.
    aspect_ratio: f32,
    draw_mode: DrawMode,
    /// CSS-style color string; `"transparent"` means no border.
    border_color: String,
    border_width: f32,
    state: ImageState,
}

impl ImageElement {
    pub fn new(
        id: impl Into<ElementId>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        src: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
            selected: false,
            src: src.into(),
            aspect_ratio: 1.0,
            draw_mode: DrawMode::Cover,
            border_color: String::from("transparent"),
            border_width: 0.0,
            state: ImageState::Pending,
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

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn state(&self) -> ImageState {
        self.state
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn set_draw_mode(&mut self, mode: DrawMode) {
        self.draw_mode = mode;
    }

    pub fn border_color(&self) -> &str {
        &self.border_color
    }

    pub fn set_border_color(&mut self, color: impl Into<String>) {
        self.border_color = color.into();
    }

    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    pub fn set_border_width(&mut self, width: f32) {
        self.border_width = width.max(0.0);
    }

    /// Record a successful decode at the given natural size.
    ///
    /// Derives the aspect ratio and, when the element was created without
    /// an explicit size, adopts the natural size with its longest side
    /// clamped to 300. Ignored unless the state is still `Pending`.
    pub fn mark_loaded(&mut self, natural_width: f32, natural_height: f32) {
        if self.state != ImageState::Pending {
            debug!(id = %self.id, "ignoring load notification in state {:?}", self.state);
            return;
        }
        self.state = ImageState::Loaded {
            natural_width,
            natural_height,
        };
        if natural_height > 0.0 {
            self.aspect_ratio = natural_width / natural_height;
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            if natural_width > natural_height {
                self.width = natural_width.min(NATURAL_SIZE_LIMIT);
                self.height = self.width / self.aspect_ratio;
            } else {
                self.height = natural_height.min(NATURAL_SIZE_LIMIT);
                self.width = self.height * self.aspect_ratio;
            }
        }
    }

    /// Record a failed decode. Terminal: the element stays as a
    /// placeholder and never retries.
    pub fn mark_failed(&mut self) {
        if self.state != ImageState::Pending {
            debug!(id = %self.id, "ignoring failure notification in state {:?}", self.state);
            return;
        }
        self.state = ImageState::Failed;
        // Sources are often data URLs; don't flood the log with them.
        let src_prefix: String = self.src.chars().take(100).collect();
        warn!(id = %self.id, src = %src_prefix, "image failed to load");
    }

    /// Resize to `new_width`, keeping the aspect ratio.
    pub fn resize_keep_aspect(&mut self, new_width: f32) {
        self.width = new_width;
        if self.aspect_ratio > 0.0 {
            self.height = new_width / self.aspect_ratio;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_derives_aspect_and_natural_size_default() {
        let mut image = ImageElement::new("i", 0.0, 0.0, 0.0, 0.0, "wide.png");
        image.mark_loaded(600.0, 400.0);
        // Longest side clamps to 300.
        assert_eq!(image.size(), (300.0, 200.0));
        assert_eq!(image.aspect_ratio(), 1.5);

        let mut tall = ImageElement::new("t", 0.0, 0.0, 0.0, 0.0, "tall.png");
        tall.mark_loaded(200.0, 400.0);
        assert_eq!(tall.size(), (150.0, 300.0));
    }

    #[test]
    fn an_explicit_size_survives_loading() {
        let mut image = ImageElement::new("i", 0.0, 0.0, 120.0, 90.0, "img.png");
        image.mark_loaded(600.0, 400.0);
        assert_eq!(image.size(), (120.0, 90.0));
    }

    #[test]
    fn state_transitions_are_one_way() {
        let mut image = ImageElement::new("i", 0.0, 0.0, 0.0, 0.0, "img.png");
        image.mark_failed();
        assert_eq!(image.state(), ImageState::Failed);
        // A late success never resurrects a failed image.
        image.mark_loaded(600.0, 400.0);
        assert_eq!(image.state(), ImageState::Failed);
        assert_eq!(image.size(), (0.0, 0.0));
    }

    #[test]
    fn resize_keep_aspect_follows_the_loaded_ratio() {
        let mut image = ImageElement::new("i", 0.0, 0.0, 120.0, 90.0, "img.png");
        image.mark_loaded(600.0, 400.0);
        image.resize_keep_aspect(450.0);
        assert_eq!(image.size(), (450.0, 300.0));

        // Before any load the ratio is square.
        let mut pending = ImageElement::new("p", 0.0, 0.0, 100.0, 50.0, "img.png");
        pending.resize_keep_aspect(80.0);
        assert_eq!(pending.size(), (80.0, 80.0));
    }
}
