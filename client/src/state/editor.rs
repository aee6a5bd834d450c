#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use std::collections::HashSet;

use canvas::doc::{Element, ElementId};
use canvas::engine::Action;
use canvas::input::Tool;

use crate::data;

/// Chrome-side mirror of the engine's document, selection, and tool state.
///
/// The engine owns the authoritative state; this mirror is updated from the
/// [`Action`] stream so panels and the toolbar can render reactively without
/// reaching into the engine. Element positions go stale during a drag and
/// catch up when the gesture commits.
#[derive(Clone, Debug)]
pub struct EditorState {
    pub file_name: String,
    pub elements: Vec<Element>,
    pub selected_ids: HashSet<ElementId>,
    pub active_tool: Option<Tool>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            file_name: "Untitled Design Project".to_owned(),
            elements: Vec::new(),
            selected_ids: HashSet::new(),
            active_tool: Some(Tool::Select),
        }
    }
}

impl EditorState {
    /// The state the editor opens with: sample elements for demonstration.
    #[must_use]
    pub fn seeded() -> Self {
        Self { elements: data::sample_elements(), ..Self::default() }
    }

    /// A read-only state around a fixed element set (prototype preview).
    #[must_use]
    pub fn with_elements(elements: Vec<Element>) -> Self {
        Self { elements, ..Self::default() }
    }

    /// Fold one engine action into the mirror. Render/cursor/viewport
    /// actions are not chrome concerns and are ignored here.
    pub fn apply_action(&mut self, action: &Action) {
        match action {
            Action::SelectionChanged(ids) => self.selected_ids.clone_from(ids),
            Action::ElementsChanged(elements) => self.elements.clone_from(elements),
            Action::ToolChanged(tool) => self.active_tool = *tool,
            Action::ViewportChanged { .. } | Action::SetCursor(_) | Action::RenderNeeded => {}
        }
    }

    /// The selected element, when exactly one is selected.
    #[must_use]
    pub fn sole_selected_element(&self) -> Option<&Element> {
        if self.selected_ids.len() != 1 {
            return None;
        }
        self.selected_ids
            .iter()
            .next()
            .and_then(|id| self.elements.iter().find(|e| &e.id == id))
    }

    /// Whether the given element is selected.
    #[must_use]
    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected_ids.contains(id)
    }
}
