//! Input model: tools, modifier keys, mouse buttons, and the gesture state
//! machine.
//!
//! `Tool` and `Modifiers` capture the user's intent at the time of a pointer
//! event. `UiState` is the persistent selection/tool state visible to the
//! renderer and the host chrome. `InputState` is the active gesture being
//! tracked between pointer-down and pointer-up, carrying all context needed
//! to compute incremental deltas and to revert on cancellation.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::collections::HashSet;

use crate::camera::Point;
use crate::doc::ElementId;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Draw a frame.
    Frame,
    /// Draw a rectangle.
    Rectangle,
    /// Draw an ellipse.
    Ellipse,
    /// Draw a straight line segment.
    Line,
    /// Draw a polygon.
    Polygon,
    /// Pen / vector path tool.
    Pen,
    /// Create a text box.
    Text,
    /// Pan the canvas by dragging.
    Hand,
    /// Leave a comment pin.
    Comment,
}

impl Tool {
    /// Whether this is a drawing tool — anything except `Select`, `Hand`,
    /// and `Comment`. Activating a drawing tool clears the selection, and
    /// clicking an element while one is active switches back to `Select`.
    #[must_use]
    pub fn is_drawing(self) -> bool {
        !matches!(self, Self::Select | Self::Hand | Self::Comment)
    }

    /// Whether this tool creates an element of the document's closed kind
    /// set when used. Frame, line, polygon, pen, and comment do not — they
    /// are surfaced to the host as unfinished stubs.
    #[must_use]
    pub fn creates_element(self) -> bool {
        matches!(self, Self::Rectangle | Self::Ellipse | Self::Text)
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key, holding the key name as reported by the browser
/// (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Persistent selection/tool state visible to the renderer and host chrome.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Currently active tool, or `None` after an explicit deselect.
    pub active_tool: Option<Tool>,
    /// Ids of the currently selected elements. Invariant: every id
    /// references an element that exists in the document.
    pub selected_ids: HashSet<ElementId>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_tool: Some(Tool::Select),
            selected_ids: HashSet::new(),
        }
    }
}

/// Internal state for the input state machine.
///
/// Each active variant carries the gesture context needed to compute deltas
/// and to revert cleanly when the gesture is cancelled by pointer-leave or
/// Escape.
#[derive(Debug, Clone)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// The user is panning the canvas.
    Panning {
        /// Screen-space position of the previous pointer event, used to
        /// compute the pan delta.
        last_screen: Point,
    },
    /// The user is moving the selected elements across the canvas.
    MovingSelection {
        /// World-space position of the pointer at the previous event.
        last_world: Point,
        /// `(id, x, y)` of every moved element at gesture start, used to
        /// revert on cancel and to detect zero net movement.
        origins: Vec<(ElementId, f64, f64)>,
    },
    /// The user is sizing a newly created (provisional) element by dragging
    /// from an anchor corner.
    DrawingElement {
        /// Id of the provisional element being sized.
        id: ElementId,
        /// The world-space corner where the drag started; the bounding box
        /// is derived from it on every move.
        anchor_world: Point,
    },
}

impl Default for InputState {
    fn default() -> Self {
        Self::Idle
    }
}
