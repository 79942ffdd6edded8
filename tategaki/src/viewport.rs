// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Pan/zoom state of the canvas.
///
/// The host applies this transform when painting; the editor only does the
/// coordinate math, converting device-space pointer positions into the
/// canvas space that element bounds live in.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Viewport {
    /// Horizontal translation in device pixels.
    pub x: f32,
    /// Vertical translation in device pixels.
    pub y: f32,
    /// Uniform zoom factor, always positive.
    pub scale: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

impl Viewport {
    /// Replace the whole transform. Non-positive scales are clamped.
    pub fn set_transform(&mut self, x: f32, y: f32, scale: f32) {
        self.x = x;
        self.y = y;
        self.scale = scale.max(0.01);
    }

    /// Shift the view by a device-space delta.
    pub fn translate_by(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Map a device-space point into canvas space.
    pub fn to_canvas(&self, x: f32, y: f32) -> (f32, f32) {
        ((x - self.x) / self.scale, (y - self.y) / self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_canvas_inverts_the_transform() {
        let mut viewport = Viewport::default();
        viewport.set_transform(100.0, 50.0, 2.0);
        assert_eq!(viewport.to_canvas(100.0, 50.0), (0.0, 0.0));
        assert_eq!(viewport.to_canvas(140.0, 70.0), (20.0, 10.0));
    }

    #[test]
    fn translate_accumulates() {
        let mut viewport = Viewport::default();
        viewport.translate_by(5.0, -3.0);
        viewport.translate_by(5.0, -3.0);
        assert_eq!((viewport.x, viewport.y), (10.0, -6.0));
    }

    #[test]
    fn scale_never_goes_nonpositive() {
        let mut viewport = Viewport::default();
        viewport.set_transform(0.0, 0.0, -1.0);
        assert!(viewport.scale > 0.0);
    }
}
