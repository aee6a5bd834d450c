use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_select() {
    assert_eq!(Tool::default(), Tool::Select);
}

#[test]
fn tool_all_variants_distinct() {
    let variants = [
        Tool::Select,
        Tool::Frame,
        Tool::Rectangle,
        Tool::Ellipse,
        Tool::Line,
        Tool::Polygon,
        Tool::Pen,
        Tool::Text,
        Tool::Hand,
        Tool::Comment,
    ];
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn drawing_tools_exclude_select_hand_comment() {
    assert!(!Tool::Select.is_drawing());
    assert!(!Tool::Hand.is_drawing());
    assert!(!Tool::Comment.is_drawing());

    assert!(Tool::Frame.is_drawing());
    assert!(Tool::Rectangle.is_drawing());
    assert!(Tool::Ellipse.is_drawing());
    assert!(Tool::Line.is_drawing());
    assert!(Tool::Polygon.is_drawing());
    assert!(Tool::Pen.is_drawing());
    assert!(Tool::Text.is_drawing());
}

#[test]
fn only_closed_kind_tools_create_elements() {
    assert!(Tool::Rectangle.creates_element());
    assert!(Tool::Ellipse.creates_element());
    assert!(Tool::Text.creates_element());

    assert!(!Tool::Select.creates_element());
    assert!(!Tool::Frame.creates_element());
    assert!(!Tool::Line.creates_element());
    assert!(!Tool::Polygon.creates_element());
    assert!(!Tool::Pen.creates_element());
    assert!(!Tool::Hand.creates_element());
    assert!(!Tool::Comment.creates_element());
}

#[test]
fn every_element_creating_tool_is_a_drawing_tool() {
    for tool in [Tool::Rectangle, Tool::Ellipse, Tool::Text] {
        assert!(tool.is_drawing());
    }
}

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
}

#[test]
fn modifiers_individual_flags() {
    let m = Modifiers { shift: true, ctrl: false, alt: true, meta: false };
    assert!(m.shift);
    assert!(!m.ctrl);
    assert!(m.alt);
    assert!(!m.meta);
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_all_variants_distinct() {
    let variants = [Button::Primary, Button::Middle, Button::Secondary];
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

// =============================================================
// Key
// =============================================================

#[test]
fn key_equality() {
    assert_eq!(Key("Escape".into()), Key("Escape".into()));
    assert_ne!(Key("Escape".into()), Key("Delete".into()));
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_tool_is_select() {
    let ui = UiState::default();
    assert_eq!(ui.active_tool, Some(Tool::Select));
}

#[test]
fn ui_state_default_selection_is_empty() {
    let ui = UiState::default();
    assert!(ui.selected_ids.is_empty());
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert!(matches!(InputState::default(), InputState::Idle));
}
