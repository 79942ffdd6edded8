// Copyright 2026 the Tategaki Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element collection.

use indexmap::IndexMap;
use styled_runs::Brush;

use crate::element::{Element, ElementId};

/// Every element on the paper, in z-order.
///
/// Insertion order is paint order: later elements draw on top. Ids are
/// unique; inserting an element whose id already exists replaces it in
/// place, keeping its z position.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Document<B: Brush> {
    elements: IndexMap<ElementId, Element<B>>,
}

impl<B: Brush> Document<B> {
    pub fn new() -> Self {
        Self {
            elements: IndexMap::new(),
        }
    }

    /// Add an element on top of the stack (or replace one in place when
    /// the id is already present).
    pub fn add(&mut self, element: Element<B>) {
        self.elements.insert(element.id().to_owned(), element);
    }

    /// Remove an element, preserving the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<Element<B>> {
        self.elements.shift_remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&Element<B>> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element<B>> {
        self.elements.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Elements bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Element<B>> {
        self.elements.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Element<B>> {
        self.elements.values_mut()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// The topmost element whose bounds contain the canvas-space point.
    ///
    /// Walks top to bottom so overlapping elements resolve to the one
    /// painted last. Bounds are axis-aligned boxes with inclusive edges.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<&Element<B>> {
        self.elements.values().rev().find(|element| {
            let (ex, ey) = element.position();
            let (width, height) = element.size();
            x >= ex && x <= ex + width && y >= ey && y <= ey + height
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ImageElement, TextElement};
    use crate::layout::TextDefaults;

    type Doc = Document<String>;

    fn image(id: &str, x: f32, y: f32, w: f32, h: f32) -> Element<String> {
        ImageElement::new(id, x, y, w, h, "img.png").into()
    }

    #[test]
    fn add_and_remove_preserve_order() {
        let mut doc = Doc::new();
        doc.add(image("a", 0.0, 0.0, 10.0, 10.0));
        doc.add(image("b", 0.0, 0.0, 10.0, 10.0));
        doc.add(image("c", 0.0, 0.0, 10.0, 10.0));
        doc.remove("b");

        let ids: Vec<&str> = doc.iter().map(Element::id).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn hit_test_prefers_the_topmost_overlap() {
        let mut doc = Doc::new();
        doc.add(image("below", 0.0, 0.0, 100.0, 100.0));
        doc.add(image("above", 50.0, 50.0, 100.0, 100.0));

        assert_eq!(doc.hit_test(75.0, 75.0).map(Element::id), Some("above"));
        assert_eq!(doc.hit_test(10.0, 10.0).map(Element::id), Some("below"));
        assert_eq!(doc.hit_test(500.0, 500.0).map(Element::id), None);
    }

    #[test]
    fn text_elements_participate_once_measured() {
        let mut doc = Doc::new();
        let mut text = TextElement::<String>::new("t", 10.0, 10.0, TextDefaults::default());
        text.set_plain_text("hi");
        text.set_size(40.0, 80.0);
        doc.add(text.into());

        assert_eq!(doc.hit_test(20.0, 20.0).map(Element::id), Some("t"));
    }
}
