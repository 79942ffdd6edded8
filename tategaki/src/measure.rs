// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Character measurement seam.
//!
//! Horizontal layout needs a per-character advance because Latin and CJK
//! glyphs differ in natural width. The engine never measures text itself; it
//! asks an injected [`CharMetrics`] implementation, which a host typically
//! backs with its raster surface's text measurement.

use core::fmt::Debug;

/// Source of horizontal glyph advances.
pub trait CharMetrics: Debug {
    /// Advance width of `ch` at `font_size`, excluding letter spacing.
    fn advance(&self, ch: char, font_size: f32, font_family: &str) -> f32;
}

/// Fallback metrics for hosts without a measurement backend.
///
/// Treats every non-ASCII character as full-width and ASCII as 0.6 em, which
/// matches CJK-dominant content closely enough for editing geometry.
#[derive(Copy, Clone, Default, Debug)]
pub struct HeuristicMetrics;

impl CharMetrics for HeuristicMetrics {
    fn advance(&self, ch: char, font_size: f32, _font_family: &str) -> f32 {
        if ch.is_ascii() {
            font_size * 0.6
        } else {
            font_size
        }
    }
}
