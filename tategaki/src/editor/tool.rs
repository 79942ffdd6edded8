// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_runs::Brush;

use super::EditorCore;
use crate::events::{PointerEvent, WheelEvent};

/// An interaction mode.
///
/// Exactly one tool is active at a time; the editor routes input events to
/// it and fires `on_disable`/`on_enable` on explicit tool switches only.
/// Tools hold their own transient drag state and mutate the editor solely
/// through the core passed into each handler.
pub(super) trait Tool<B: Brush> {
    fn on_enable(&mut self, _core: &mut EditorCore<B>) {}

    fn on_disable(&mut self, _core: &mut EditorCore<B>) {}

    fn on_pointer_down(&mut self, _core: &mut EditorCore<B>, _event: PointerEvent) {}

    fn on_pointer_move(&mut self, _core: &mut EditorCore<B>, _event: PointerEvent) {}

    fn on_pointer_up(&mut self, _core: &mut EditorCore<B>, _event: PointerEvent) {}

    fn on_wheel(&mut self, _core: &mut EditorCore<B>, _event: WheelEvent) {}
}
