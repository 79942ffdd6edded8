// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use styled_runs::Brush;
use tracing::trace;

use super::handles::{Frame, Handle};
use super::tool::Tool;
use super::EditorCore;
use crate::element::Element;
use crate::events::PointerEvent;
use crate::history::{ElementPatch, Operation};

/// The default tool: select, move, resize, and text-range selection.
///
/// Pointer-down decides the gesture; pointer-up records history, and only
/// when the gesture actually changed geometry. A drag that ends where it
/// started leaves the stacks untouched.
#[derive(Default, Debug)]
pub(super) struct SelectTool {
    drag: Drag,
}

#[derive(Default, Debug)]
enum Drag {
    #[default]
    Idle,
    /// Moving the selected element; `last` feeds incremental deltas,
    /// `start` is the position snapshot for history.
    Moving {
        last: (f32, f32),
        start: (f32, f32),
    },
    /// Dragging a resize handle. Geometry is always recomputed from the
    /// start frame and the total pointer delta.
    Resizing {
        handle: Handle,
        start_frame: Frame,
        start_constraints: Option<(f32, f32)>,
        start_pointer: (f32, f32),
    },
    /// Extending a character selection inside the selected text element.
    SelectingText,
}

fn frame_of<B: Brush>(element: &Element<B>) -> Frame {
    let (x, y) = element.position();
    let (width, height) = element.size();
    Frame {
        x,
        y,
        width,
        height,
    }
}

impl<B: Brush> Tool<B> for SelectTool {
    fn on_enable(&mut self, _core: &mut EditorCore<B>) {
        self.drag = Drag::Idle;
    }

    fn on_disable(&mut self, core: &mut EditorCore<B>) {
        self.drag = Drag::Idle;
        for element in core.document.iter_mut() {
            element.set_selected(false);
        }
        core.selection.clear();
        core.nudge();
    }

    fn on_pointer_down(&mut self, core: &mut EditorCore<B>, event: PointerEvent) {
        let (x, y) = core.viewport.to_canvas(event.x, event.y);

        // A handle on the current selection wins over everything else.
        if let Some(id) = core.selection.selected_id.clone() {
            if let Some(element) = core.document.get(&id) {
                let frame = frame_of(element);
                if let Some(handle) = Handle::hit_test(frame, x, y) {
                    trace!(id = %id, ?handle, "resize started");
                    self.drag = Drag::Resizing {
                        handle,
                        start_frame: frame,
                        start_constraints: element.as_text().map(|text| text.constraints()),
                        start_pointer: (x, y),
                    };
                    return;
                }
            }
        }

        let hit_id = core
            .document
            .hit_test(x, y)
            .map(|element| element.id().to_owned());

        // Clicking inside the already selected text drops into character
        // selection instead of starting a move.
        if let Some(hit) = hit_id.as_deref() {
            if core.selection.selected_id.as_deref() == Some(hit) {
                if let Some(index) = core.char_index_at(hit, x, y) {
                    core.selection.text_range = Some((index, index));
                    self.drag = Drag::SelectingText;
                    core.nudge();
                    return;
                }
            }
        }

        // Plain selection: topmost hit becomes selected and draggable.
        for element in core.document.iter_mut() {
            element.set_selected(false);
        }
        match hit_id {
            Some(id) => {
                if let Some(element) = core.document.get_mut(&id) {
                    element.set_selected(true);
                    self.drag = Drag::Moving {
                        last: (x, y),
                        start: element.position(),
                    };
                }
                core.selection.select(id);
            }
            None => {
                self.drag = Drag::Idle;
                core.selection.clear();
            }
        }
        core.nudge();
    }

    fn on_pointer_move(&mut self, core: &mut EditorCore<B>, event: PointerEvent) {
        let (x, y) = core.viewport.to_canvas(event.x, event.y);
        match &mut self.drag {
            Drag::Idle => {}
            Drag::Moving { last, .. } => {
                let (dx, dy) = (x - last.0, y - last.1);
                *last = (x, y);
                if let Some(id) = core.selection.selected_id.clone() {
                    if let Some(element) = core.document.get_mut(&id) {
                        element.move_by(dx, dy);
                    }
                    core.nudge();
                }
            }
            Drag::Resizing {
                handle,
                start_frame,
                start_pointer,
                ..
            } => {
                let handle = *handle;
                let start = *start_frame;
                let (dx, dy) = (x - start_pointer.0, y - start_pointer.1);
                let Some(id) = core.selection.selected_id.clone() else {
                    return;
                };
                let Some(element) = core.document.get_mut(&id) else {
                    return;
                };
                let mut frame = handle.resize(start, dx, dy);
                if element.as_image().is_some() {
                    frame = handle.lock_aspect(start, frame, dx, dy);
                }
                element.set_position(frame.x, frame.y);
                match element {
                    Element::Text(text) => {
                        // A manual resize fixes the box: text reflows
                        // inside it from now on.
                        text.set_size(frame.width, frame.height);
                        text.set_constraints(frame.width, frame.height);
                    }
                    Element::Image(image) => image.set_size(frame.width, frame.height),
                }
                core.nudge();
            }
            Drag::SelectingText => {
                let Some(id) = core.selection.selected_id.clone() else {
                    return;
                };
                if let Some(index) = core.char_index_at(&id, x, y) {
                    if let Some((anchor, _)) = core.selection.text_range {
                        core.selection.text_range = Some((anchor, index));
                        core.nudge();
                    }
                }
            }
        }
    }

    fn on_pointer_up(&mut self, core: &mut EditorCore<B>, _event: PointerEvent) {
        match std::mem::take(&mut self.drag) {
            Drag::Idle | Drag::SelectingText => {}
            Drag::Moving { start, .. } => {
                let Some(id) = core.selection.selected_id.clone() else {
                    return;
                };
                let Some(element) = core.document.get(&id) else {
                    return;
                };
                if element.position() != start {
                    let old = ElementPatch {
                        x: Some(start.0),
                        y: Some(start.1),
                        ..ElementPatch::default()
                    };
                    let new = ElementPatch::position_of(element);
                    core.history.push(vec![Operation::Update { id, old, new }]);
                }
            }
            Drag::Resizing {
                start_frame,
                start_constraints,
                ..
            } => {
                let Some(id) = core.selection.selected_id.clone() else {
                    return;
                };
                let Some(element) = core.document.get(&id) else {
                    return;
                };
                if element.size() != (start_frame.width, start_frame.height) {
                    let mut old = ElementPatch {
                        x: Some(start_frame.x),
                        y: Some(start_frame.y),
                        width: Some(start_frame.width),
                        height: Some(start_frame.height),
                        ..ElementPatch::default()
                    };
                    if let Some((cw, ch)) = start_constraints {
                        old.constraint_width = Some(cw);
                        old.constraint_height = Some(ch);
                    }
                    let new = ElementPatch::frame_of(element);
                    core.history.push(vec![Operation::Update { id, old, new }]);
                }
            }
        }
    }
}
