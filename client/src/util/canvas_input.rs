//! Mapping from DOM events to the canvas engine's input types.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use canvas::camera::Point;
use canvas::input::{Button, Modifiers};

/// Map a DOM `button` code to an engine button.
#[must_use]
pub fn map_button(button: i16) -> Button {
    match button {
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Primary,
    }
}

/// Collect modifier flags into the engine's representation.
#[must_use]
pub fn map_modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers { shift, ctrl, alt, meta }
}

/// Pointer position relative to the canvas element, in CSS pixels.
#[must_use]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Wheel position relative to the canvas element, in CSS pixels.
#[must_use]
pub fn wheel_point(ev: &leptos::ev::WheelEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Keys the canvas handles itself; the browser default (navigation, page
/// scroll) must be suppressed for these.
#[must_use]
pub fn should_prevent_default_key(key: &str) -> bool {
    matches!(key, "Delete" | "Backspace" | "Escape")
}
