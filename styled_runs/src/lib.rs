// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styled text runs.
//!
//! A piece of rich text is stored as an ordered sequence of [`StyledRun`]s:
//! maximal substrings that share one sparse [`CharStyle`]. Concatenating the
//! run texts always reconstructs the full logical string, and all range
//! operations address **character** offsets into that concatenation,
//! end-exclusive.

mod brush;
mod runs;
mod style;

pub use brush::Brush;
pub use runs::{RichContent, StyledRun};
pub use style::{CharStyle, FontSlant, FontWeight};
