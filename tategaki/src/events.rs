// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events fed to the editor by the host.
//!
//! These are plain values in device (canvas-surface) coordinates; the
//! editor converts them through the viewport before hit-testing. The host
//! owns the real event loop and translates whatever its windowing layer
//! produces into these.

/// A pointer press, move or release.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A scroll-wheel tick.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct WheelEvent {
    pub delta_x: f32,
    pub delta_y: f32,
}

impl WheelEvent {
    pub fn new(delta_x: f32, delta_y: f32) -> Self {
        Self { delta_x, delta_y }
    }
}
