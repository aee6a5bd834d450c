//! Document model: design elements and the in-memory store.
//!
//! An [`Element`] is one item on the canvas (`Rectangle`, `Ellipse`, or
//! `Text`). The [`Document`] owns all live elements as a flat ordered
//! sequence — there is no nesting, and stacking order is sequence order
//! (later elements draw on top). Data flows into this layer from the host
//! (seed snapshots) and from the input engine (mutations); the renderer
//! reads the sequence front to back.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a design element.
pub type ElementId = Uuid;

/// The kind of a design element. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Axis-aligned rectangle.
    Rectangle,
    /// Ellipse inscribed within the bounding box.
    Ellipse,
    /// Text box; content in [`Element::text`].
    Text,
}

/// A design element as stored in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier for this element.
    pub id: ElementId,
    /// Shape or text kind.
    pub kind: ElementKind,
    /// Left edge of the bounding box in world units.
    pub x: f64,
    /// Top edge of the bounding box in world units.
    pub y: f64,
    /// Width of the bounding box in world units.
    pub width: f64,
    /// Height of the bounding box in world units.
    pub height: f64,
    /// Fill color as a CSS color string. For text elements this is the
    /// text color.
    pub fill: String,
    /// Stroke color as a CSS color string, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// Text content, for text elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// In-memory store of design elements, ordered bottom to top.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element at the top of the stacking order.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove an element by id, returning it if it was present.
    /// The relative order of the remaining elements is preserved.
    pub fn remove(&mut self, id: &ElementId) -> Option<Element> {
        let idx = self.elements.iter().position(|e| &e.id == id)?;
        Some(self.elements.remove(idx))
    }

    /// Return a reference to an element by id.
    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    /// Return a mutable reference to an element by id.
    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| &e.id == id)
    }

    /// Whether an element with this id exists.
    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.iter().any(|e| &e.id == id)
    }

    /// Replace all elements with a full snapshot, keeping its order.
    pub fn load(&mut self, elements: Vec<Element>) {
        self.elements = elements;
    }

    /// The element sequence, bottom to top.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Clone the element sequence, e.g. for an elements-changed callback.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Element> {
        self.elements.clone()
    }

    /// Number of elements currently in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the document contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
