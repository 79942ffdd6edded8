// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_runs::Brush;
use tracing::trace;

use super::tool::Tool;
use super::EditorCore;
use crate::events::{PointerEvent, WheelEvent};

/// The hand tool: drag to pan, wheel to scroll.
///
/// Pure viewport manipulation; never touches the document or history.
#[derive(Default, Debug)]
pub(super) struct PanTool {
    /// Device-space drag origin and the viewport translation at that
    /// moment, while a drag is in progress.
    grab: Option<Grab>,
}

#[derive(Copy, Clone, Debug)]
struct Grab {
    pointer: (f32, f32),
    viewport: (f32, f32),
}

impl<B: Brush> Tool<B> for PanTool {
    fn on_disable(&mut self, _core: &mut EditorCore<B>) {
        self.grab = None;
    }

    fn on_pointer_down(&mut self, core: &mut EditorCore<B>, event: PointerEvent) {
        self.grab = Some(Grab {
            pointer: (event.x, event.y),
            viewport: (core.viewport.x, core.viewport.y),
        });
        trace!(x = event.x, y = event.y, "pan started");
    }

    fn on_pointer_move(&mut self, core: &mut EditorCore<B>, event: PointerEvent) {
        let Some(grab) = self.grab else {
            return;
        };
        let scale = core.viewport.scale;
        core.viewport.set_transform(
            grab.viewport.0 + (event.x - grab.pointer.0),
            grab.viewport.1 + (event.y - grab.pointer.1),
            scale,
        );
        core.nudge();
    }

    fn on_pointer_up(&mut self, _core: &mut EditorCore<B>, _event: PointerEvent) {
        self.grab = None;
    }

    fn on_wheel(&mut self, core: &mut EditorCore<B>, event: WheelEvent) {
        core.viewport.translate_by(-event.delta_x, -event.delta_y);
        core.nudge();
    }
}
