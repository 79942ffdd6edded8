// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich-text layout and editing for vertical and horizontal typesetting.
//!
//! This crate is the headless core of a canvas editor for traditional
//! East-Asian page composition: styled text blocks and images placed on a
//! fixed-size paper surface. It owns the parts that are easy to get wrong:
//! converting styled runs into positioned glyph cells under two mutually
//! exclusive flow directions, mapping pixels back to character indices for
//! caret and selection placement, and keeping every mutation reversible
//! through a bounded undo/redo history.
//!
//! Painting, real input wiring, IME bridging and export plumbing are left to
//! host collaborators: the host feeds [`events`] into the [`Editor`], polls
//! its [`Generation`] to know when to repaint, and reads layout geometry
//! back out to draw.

pub use styled_runs::{Brush, CharStyle, FontSlant, FontWeight, RichContent, StyledRun};

pub mod document;
pub mod editor;
pub mod element;
pub mod events;
pub mod history;
pub mod layout;
pub mod measure;
pub mod options;
pub mod serialize;
pub mod viewport;

#[cfg(test)]
mod tests;

pub use document::Document;
pub use editor::{Editor, Generation, SelectionState, ToolKind};
pub use element::{DrawMode, Element, ElementId, ImageElement, ImageState, TextElement};
pub use layout::cursor::{Cursor, Selection};
pub use layout::{Cell, Layout, LayoutMode, TextDefaults};
pub use measure::{CharMetrics, HeuristicMetrics};
pub use options::{EditorOptions, GridKind, GridOptions};
pub use serialize::DocumentError;
pub use viewport::Viewport;
