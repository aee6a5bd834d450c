#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use canvas::camera::Point;

use super::*;

fn sample() -> EditorState {
    EditorState::seeded()
}

#[test]
fn default_tool_is_select() {
    assert_eq!(EditorState::default().active_tool, Some(Tool::Select));
}

#[test]
fn default_selection_is_empty() {
    assert!(EditorState::default().selected_ids.is_empty());
}

#[test]
fn seeded_state_has_elements() {
    assert!(!sample().elements.is_empty());
}

#[test]
fn selection_changed_action_updates_mirror() {
    let mut state = sample();
    let id = state.elements[0].id;
    let mut ids = HashSet::new();
    ids.insert(id);

    state.apply_action(&Action::SelectionChanged(ids));
    assert!(state.is_selected(&id));
}

#[test]
fn elements_changed_action_replaces_sequence() {
    let mut state = sample();
    state.apply_action(&Action::ElementsChanged(Vec::new()));
    assert!(state.elements.is_empty());
}

#[test]
fn tool_changed_action_updates_tool() {
    let mut state = sample();
    state.apply_action(&Action::ToolChanged(Some(Tool::Rectangle)));
    assert_eq!(state.active_tool, Some(Tool::Rectangle));

    state.apply_action(&Action::ToolChanged(None));
    assert_eq!(state.active_tool, None);
}

#[test]
fn viewport_and_render_actions_do_not_touch_mirror() {
    let mut state = sample();
    let before = state.clone();

    state.apply_action(&Action::ViewportChanged { zoom: 2.0, pan: Point::new(1.0, 2.0) });
    state.apply_action(&Action::RenderNeeded);
    state.apply_action(&Action::SetCursor("grabbing".to_owned()));

    assert_eq!(state.elements.len(), before.elements.len());
    assert_eq!(state.selected_ids, before.selected_ids);
    assert_eq!(state.active_tool, before.active_tool);
}

#[test]
fn sole_selected_element_requires_exactly_one() {
    let mut state = sample();
    assert!(state.sole_selected_element().is_none());

    let mut ids = HashSet::new();
    ids.insert(state.elements[0].id);
    state.apply_action(&Action::SelectionChanged(ids.clone()));
    assert!(state.sole_selected_element().is_some());

    ids.insert(state.elements[1].id);
    state.apply_action(&Action::SelectionChanged(ids));
    assert!(state.sole_selected_element().is_none());
}

#[test]
fn sole_selected_element_tolerates_stale_id() {
    // A selection id that no longer resolves (e.g. mid-teardown) yields None
    // rather than panicking.
    let mut state = sample();
    let id = state.elements[0].id;
    let mut ids = HashSet::new();
    ids.insert(id);
    state.apply_action(&Action::SelectionChanged(ids));
    state.apply_action(&Action::ElementsChanged(Vec::new()));

    assert!(state.sole_selected_element().is_none());
}

// --- CanvasViewState ---

use crate::state::view::CanvasViewState;

#[test]
fn view_defaults_are_identity() {
    let view = CanvasViewState::default();
    assert_eq!(view.zoom, 1.0);
    assert_eq!(view.zoom_percent(), "100%");
}

#[test]
fn view_applies_viewport_changes() {
    let mut view = CanvasViewState::default();
    view.apply_action(&Action::ViewportChanged { zoom: 2.5, pan: Point::new(10.0, -4.0) });
    assert_eq!(view.zoom, 2.5);
    assert_eq!(view.pan_x, 10.0);
    assert_eq!(view.pan_y, -4.0);
    assert_eq!(view.zoom_percent(), "250%");
}

#[test]
fn view_applies_cursor_changes() {
    let mut view = CanvasViewState::default();
    view.apply_action(&Action::SetCursor("grabbing".to_owned()));
    assert_eq!(view.cursor, "grabbing");
}

#[test]
fn view_ignores_document_actions() {
    let mut view = CanvasViewState::default();
    view.apply_action(&Action::ElementsChanged(Vec::new()));
    view.apply_action(&Action::RenderNeeded);
    assert_eq!(view.zoom, 1.0);
    assert_eq!(view.cursor, "default");
}
