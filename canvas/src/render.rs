//! Rendering: draws the full canvas scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of document, camera, and selection state and
//! produces pixels — it does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Camera;
use crate::consts::{SELECTION_DASH_PX, SELECTION_STROKE};
use crate::doc::{Document, Element, ElementKind};
use crate::input::UiState;

/// Font for text elements, in world units (scales with zoom).
const TEXT_FONT: &str = "14px sans-serif";

/// Hint shown when the document is empty, in screen space.
const EMPTY_HINT: &str = "Canvas is empty. Select a tool to start drawing.";

/// Dashed placeholder border color around unselected text boxes.
const TEXT_BOX_BORDER: &str = "#CBD5E1";

/// Color of the empty-document hint.
const EMPTY_HINT_FILL: &str = "#9CA3AF";

/// Draw the full scene: elements in sequence order, then selection UI.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device
/// pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    doc: &Document,
    camera: &Camera,
    ui: &UiState,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear in device space, then apply the camera transform.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.translate(camera.pan_x, camera.pan_y)?;
    ctx.scale(camera.zoom, camera.zoom)?;

    // Layer 2: elements bottom to top (sequence order is stacking order).
    for el in doc.elements() {
        draw_element(ctx, el)?;
    }

    // Layer 3: selection outlines, screen-constant width.
    for id in &ui.selected_ids {
        if let Some(el) = doc.get(id) {
            draw_selection(ctx, el, camera.zoom)?;
        }
    }

    // Layer 4: empty-document hint, drawn in screen space.
    if doc.is_empty() {
        draw_empty_hint(ctx, viewport_w, viewport_h, dpr)?;
    }

    Ok(())
}

fn draw_element(ctx: &CanvasRenderingContext2d, el: &Element) -> Result<(), JsValue> {
    match el.kind {
        ElementKind::Rectangle => draw_rectangle(ctx, el),
        ElementKind::Ellipse => draw_ellipse(ctx, el),
        ElementKind::Text => draw_text(ctx, el),
    }
}

fn draw_rectangle(ctx: &CanvasRenderingContext2d, el: &Element) -> Result<(), JsValue> {
    ctx.set_fill_style_str(&el.fill);
    ctx.fill_rect(el.x, el.y, el.width, el.height);

    if let Some(stroke) = &el.stroke {
        ctx.set_stroke_style_str(stroke);
        ctx.set_line_width(1.0);
        ctx.stroke_rect(el.x, el.y, el.width, el.height);
    }
    Ok(())
}

fn draw_ellipse(ctx: &CanvasRenderingContext2d, el: &Element) -> Result<(), JsValue> {
    if el.width <= 0.0 || el.height <= 0.0 {
        return Ok(());
    }
    let cx = el.x + el.width / 2.0;
    let cy = el.y + el.height / 2.0;

    ctx.begin_path();
    ctx.ellipse(cx, cy, el.width / 2.0, el.height / 2.0, 0.0, 0.0, TAU)?;

    ctx.set_fill_style_str(&el.fill);
    ctx.fill();

    if let Some(stroke) = &el.stroke {
        ctx.set_stroke_style_str(stroke);
        ctx.set_line_width(1.0);
        ctx.stroke();
    }
    Ok(())
}

fn draw_text(ctx: &CanvasRenderingContext2d, el: &Element) -> Result<(), JsValue> {
    // Text boxes carry a faint dashed placeholder border so empty ones stay
    // visible on the canvas.
    set_dash(ctx, 3.0)?;
    ctx.set_stroke_style_str(el.stroke.as_deref().unwrap_or(TEXT_BOX_BORDER));
    ctx.set_line_width(1.0);
    ctx.stroke_rect(el.x, el.y, el.width, el.height);
    clear_dash(ctx)?;

    ctx.set_fill_style_str(&el.fill);
    ctx.set_font(TEXT_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let content = el.text.as_deref().unwrap_or("Text");
    ctx.fill_text(content, el.x + el.width / 2.0, el.y + el.height / 2.0)?;
    Ok(())
}

fn draw_selection(ctx: &CanvasRenderingContext2d, el: &Element, zoom: f64) -> Result<(), JsValue> {
    set_dash(ctx, SELECTION_DASH_PX / zoom)?;
    ctx.set_stroke_style_str(SELECTION_STROKE);
    ctx.set_line_width(2.0 / zoom);
    ctx.stroke_rect(el.x, el.y, el.width, el.height);
    clear_dash(ctx)
}

fn draw_empty_hint(
    ctx: &CanvasRenderingContext2d,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(EMPTY_HINT_FILL);
    ctx.set_font(TEXT_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(EMPTY_HINT, viewport_w / 2.0, viewport_h / 2.0)
}

fn set_dash(ctx: &CanvasRenderingContext2d, segment: f64) -> Result<(), JsValue> {
    let pattern = js_sys::Array::of2(&JsValue::from_f64(segment), &JsValue::from_f64(segment));
    ctx.set_line_dash(&JsValue::from(pattern))
}

fn clear_dash(ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    ctx.set_line_dash(&JsValue::from(js_sys::Array::new()))
}
