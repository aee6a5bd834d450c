//! Shared numeric constants for the canvas crate.

// ── Viewport ────────────────────────────────────────────────────

/// Hard floor for the zoom factor.
pub const ZOOM_MIN: f64 = 0.1;

/// Hard ceiling for the zoom factor.
pub const ZOOM_MAX: f64 = 10.0;

/// Wheel-to-zoom sensitivity. The raw delta is additionally scaled by the
/// current zoom so the same physical wheel motion feels proportionally
/// consistent at any zoom level.
pub const ZOOM_WHEEL_SENSITIVITY: f64 = 0.001;

// ── Elements ────────────────────────────────────────────────────

/// Minimum width/height in world units for a drawn shape to be kept.
pub const ELEMENT_MIN_SIZE: f64 = 4.0;

/// Width of a text box created by the text tool, in world units.
pub const TEXT_BOX_WIDTH: f64 = 150.0;

/// Height of a text box created by the text tool, in world units.
pub const TEXT_BOX_HEIGHT: f64 = 30.0;

/// Default fill for newly drawn shapes (CSS color).
pub const DEFAULT_FILL: &str = "rgba(59, 130, 246, 0.5)";

/// Default stroke for newly drawn shapes (CSS color).
pub const DEFAULT_STROKE: &str = "#3B82F6";

/// Default text color for new text elements.
pub const DEFAULT_TEXT_FILL: &str = "#1F2937";

// ── Rendering ───────────────────────────────────────────────────

/// Outline color for selected elements.
pub const SELECTION_STROKE: &str = "#3B82F6";

/// Selection dash segment length in screen pixels.
pub const SELECTION_DASH_PX: f64 = 4.0;
