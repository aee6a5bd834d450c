//! Hit-testing against the element sequence.
//!
//! Detection is an explicit world-space test against the document rather
//! than a comparison of DOM event targets: the pointer position is mapped
//! through [`crate::camera::Camera::screen_to_world`] by the engine, and the
//! element list is scanned topmost-first (last in sequence order wins).
//!
//! All element kinds hit on their full bounding box. Ellipses and text
//! boxes behave like the DOM elements they render as: the clickable region
//! is the box, not the glyph or the inscribed curve.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::doc::{Document, Element, ElementId};

/// Test which element (if any) is under `world_pt`, topmost first.
#[must_use]
pub fn hit_test(world_pt: Point, doc: &Document) -> Option<ElementId> {
    doc.elements()
        .iter()
        .rev()
        .find(|el| contains(el, world_pt))
        .map(|el| el.id)
}

/// Whether `pt` lies within the element's bounding box (edges inclusive).
fn contains(el: &Element, pt: Point) -> bool {
    pt.x >= el.x && pt.x <= el.x + el.width && pt.y >= el.y && pt.y <= el.y + el.height
}
