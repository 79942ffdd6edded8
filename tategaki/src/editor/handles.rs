// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize-handle geometry.
//!
//! A selected element shows eight handles: four corners and four edge
//! midpoints. Corner drags resize both axes (and lock aspect ratio for
//! images); edge drags resize one axis. All resize math works on a frame
//! snapshot taken at drag start, so the element never accumulates rounding
//! from incremental deltas.

/// Handle square side, in logical pixels.
const HANDLE_SIZE: f32 = 8.0;
/// Extra hit slop around each handle square.
const HANDLE_TOLERANCE: f32 = 2.0;

/// Smallest size a resize can produce on either axis.
pub(super) const MIN_ELEMENT_SIZE: f32 = 20.0;

/// An element frame in canvas coordinates.
#[derive(Copy, Clone, PartialEq, Debug)]
pub(super) struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One of the eight resize handles.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(super) enum Handle {
    TopLeft,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl Handle {
    const ALL: [Self; 8] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
    ];

    pub(super) fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomLeft | Self::BottomRight
        )
    }

    /// Center of this handle's square on `frame`.
    fn anchor(self, frame: Frame) -> (f32, f32) {
        let mid_x = frame.x + frame.width / 2.0;
        let mid_y = frame.y + frame.height / 2.0;
        let right = frame.x + frame.width;
        let bottom = frame.y + frame.height;
        match self {
            Self::TopLeft => (frame.x, frame.y),
            Self::Top => (mid_x, frame.y),
            Self::TopRight => (right, frame.y),
            Self::Right => (right, mid_y),
            Self::BottomRight => (right, bottom),
            Self::Bottom => (mid_x, bottom),
            Self::BottomLeft => (frame.x, bottom),
            Self::Left => (frame.x, mid_y),
        }
    }

    /// The handle under a canvas-space point, if any. Corners are listed
    /// first so they win where a small frame makes squares overlap.
    pub(super) fn hit_test(frame: Frame, x: f32, y: f32) -> Option<Self> {
        let reach = HANDLE_SIZE / 2.0 + HANDLE_TOLERANCE;
        Self::ALL.into_iter().find(|handle| {
            let (hx, hy) = handle.anchor(frame);
            (x - hx).abs() <= reach && (y - hy).abs() <= reach
        })
    }

    /// The frame after dragging this handle by `(dx, dy)` from the drag
    /// start, clamped to the minimum size. Left/top handles move the
    /// origin so the opposite edge stays put.
    pub(super) fn resize(self, start: Frame, dx: f32, dy: f32) -> Frame {
        let mut frame = start;
        let grow_right = || (start.width + dx).max(MIN_ELEMENT_SIZE);
        let grow_left = || (start.width - dx).max(MIN_ELEMENT_SIZE);
        let grow_down = || (start.height + dy).max(MIN_ELEMENT_SIZE);
        let grow_up = || (start.height - dy).max(MIN_ELEMENT_SIZE);

        match self {
            Self::BottomRight => {
                frame.width = grow_right();
                frame.height = grow_down();
            }
            Self::BottomLeft => {
                frame.width = grow_left();
                frame.height = grow_down();
                frame.x = start.x + start.width - frame.width;
            }
            Self::TopRight => {
                frame.width = grow_right();
                frame.height = grow_up();
                frame.y = start.y + start.height - frame.height;
            }
            Self::TopLeft => {
                frame.width = grow_left();
                frame.height = grow_up();
                frame.x = start.x + start.width - frame.width;
                frame.y = start.y + start.height - frame.height;
            }
            Self::Right => frame.width = grow_right(),
            Self::Left => {
                frame.width = grow_left();
                frame.x = start.x + start.width - frame.width;
            }
            Self::Bottom => frame.height = grow_down(),
            Self::Top => {
                frame.height = grow_up();
                frame.y = start.y + start.height - frame.height;
            }
        }
        frame
    }

    /// Re-impose the start frame's aspect ratio on a corner resize,
    /// following the dominant drag axis. Recomputes the origin for handles
    /// whose opposite edge must stay put.
    pub(super) fn lock_aspect(self, start: Frame, mut frame: Frame, dx: f32, dy: f32) -> Frame {
        if !self.is_corner() || start.height <= 0.0 {
            return frame;
        }
        let aspect = start.width / start.height;
        if dx.abs() > dy.abs() {
            frame.height = frame.width / aspect;
        } else {
            frame.width = frame.height * aspect;
        }
        match self {
            Self::TopLeft => {
                frame.x = start.x + start.width - frame.width;
                frame.y = start.y + start.height - frame.height;
            }
            Self::BottomLeft => frame.x = start.x + start.width - frame.width,
            Self::TopRight => frame.y = start.y + start.height - frame.height,
            _ => {}
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame {
            x: 100.0,
            y: 100.0,
            width: 200.0,
            height: 100.0,
        }
    }

    #[test]
    fn hit_test_finds_corners_and_edges() {
        assert_eq!(Handle::hit_test(frame(), 100.0, 100.0), Some(Handle::TopLeft));
        assert_eq!(
            Handle::hit_test(frame(), 300.0, 200.0),
            Some(Handle::BottomRight)
        );
        assert_eq!(Handle::hit_test(frame(), 200.0, 100.0), Some(Handle::Top));
        assert_eq!(Handle::hit_test(frame(), 100.0, 150.0), Some(Handle::Left));
        assert_eq!(Handle::hit_test(frame(), 200.0, 150.0), None);
    }

    #[test]
    fn bottom_right_grows_both_axes() {
        let resized = Handle::BottomRight.resize(frame(), 30.0, 20.0);
        assert_eq!((resized.x, resized.y), (100.0, 100.0));
        assert_eq!((resized.width, resized.height), (230.0, 120.0));
    }

    #[test]
    fn top_left_keeps_the_opposite_corner() {
        let resized = Handle::TopLeft.resize(frame(), 30.0, 20.0);
        assert_eq!(resized.x + resized.width, 300.0);
        assert_eq!(resized.y + resized.height, 200.0);
        assert_eq!((resized.width, resized.height), (170.0, 80.0));
    }

    #[test]
    fn edge_handles_touch_one_axis() {
        let resized = Handle::Right.resize(frame(), 50.0, 999.0);
        assert_eq!(resized.height, 100.0);
        assert_eq!(resized.width, 250.0);
    }

    #[test]
    fn resize_clamps_to_minimum() {
        let resized = Handle::BottomRight.resize(frame(), -500.0, -500.0);
        assert_eq!((resized.width, resized.height), (MIN_ELEMENT_SIZE, MIN_ELEMENT_SIZE));
    }

    #[test]
    fn aspect_lock_follows_the_dominant_axis() {
        let resized = Handle::BottomRight.resize(frame(), 100.0, 10.0);
        let locked = Handle::BottomRight.lock_aspect(frame(), resized, 100.0, 10.0);
        // Aspect 2:1, width dominated.
        assert_eq!(locked.width, 300.0);
        assert_eq!(locked.height, 150.0);
    }

    #[test]
    fn aspect_lock_ignores_edge_handles() {
        let resized = Handle::Right.resize(frame(), 100.0, 0.0);
        let locked = Handle::Right.lock_aspect(frame(), resized, 100.0, 0.0);
        assert_eq!(locked, resized);
    }
}
