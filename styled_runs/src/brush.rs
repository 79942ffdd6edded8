// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Trait for types that represent the color of glyphs or decorations.
///
/// The run model never interprets a brush; it only stores, clones and
/// compares them. Hosts choose the representation (a CSS color string, a
/// paint handle, ...).
pub trait Brush: Clone + PartialEq + Default + core::fmt::Debug {}

impl<T: Clone + PartialEq + Default + core::fmt::Debug> Brush for T {}
