//! The canvas engine: owns the document, camera, and selection/tool state,
//! and turns raw input events into state transitions and host actions.
//!
//! All logic lives in [`EngineCore`], which is pure state — testable
//! natively, with no WASM or browser dependency. [`Engine`] wraps the core
//! together with the browser canvas element and the renderer.
//!
//! Every handler runs synchronously on the UI event loop and is atomic with
//! respect to the state it reads and writes; the returned [`Action`] list is
//! the only externally visible effect.

use std::collections::HashSet;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::consts::{
    DEFAULT_FILL, DEFAULT_STROKE, DEFAULT_TEXT_FILL, ELEMENT_MIN_SIZE, TEXT_BOX_HEIGHT,
    TEXT_BOX_WIDTH,
};
use crate::doc::{Document, Element, ElementId, ElementKind};
use crate::input::{Button, InputState, Key, Modifiers, Tool, UiState, WheelDelta};
use crate::{hit, render};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    /// The selection set changed; carries the new set.
    SelectionChanged(HashSet<ElementId>),
    /// The element sequence changed; carries the new sequence.
    ElementsChanged(Vec<Element>),
    /// The camera changed; carries the new zoom and pan.
    ViewportChanged { zoom: f64, pan: Point },
    /// The active tool changed; carries the new tool (`None` = deselected).
    ToolChanged(Option<Tool>),
    /// The host should set the given CSS cursor on the canvas.
    SetCursor(String),
    /// The scene needs to be redrawn.
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Engine`] so it can be tested without WASM/browser
/// dependencies.
pub struct EngineCore {
    pub doc: Document,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            doc: Document::new(),
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace the document with a host-provided element sequence.
    /// Selection ids that no longer resolve are pruned.
    pub fn load_elements(&mut self, elements: Vec<Element>) {
        self.doc.load(elements);
        self.ui.selected_ids.retain(|id| self.doc.contains(id));
    }

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    // --- Tool commands ---

    /// Set the active tool. Re-selecting the already-active tool is a no-op.
    /// Activating a drawing tool clears the selection.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        if self.ui.active_tool == Some(tool) {
            return Vec::new();
        }
        self.ui.active_tool = Some(tool);
        let mut actions = vec![Action::ToolChanged(Some(tool))];
        if tool.is_drawing() && !self.ui.selected_ids.is_empty() {
            self.ui.selected_ids.clear();
            actions.push(self.selection_changed());
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Explicitly deselect the active tool.
    pub fn clear_tool(&mut self) -> Vec<Action> {
        if self.ui.active_tool.is_none() {
            return Vec::new();
        }
        self.ui.active_tool = None;
        vec![Action::ToolChanged(None)]
    }

    // --- Selection commands (host chrome, e.g. a layers panel) ---

    /// Select an element by id: toggle when `additive`, replace otherwise.
    /// Unknown ids are ignored.
    pub fn select_element(&mut self, id: &ElementId, additive: bool) -> Vec<Action> {
        if !self.doc.contains(id) {
            return Vec::new();
        }
        if self.apply_click_selection(*id, additive) {
            vec![self.selection_changed(), Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        match button {
            Button::Secondary => Vec::new(),
            Button::Middle => {
                // Middle-drag pans regardless of the active tool.
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::SetCursor("grabbing".to_owned())]
            }
            Button::Primary => self.primary_pointer_down(screen_pt, modifiers),
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        match &mut self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { last_screen } => {
                let dx = screen_pt.x - last_screen.x;
                let dy = screen_pt.y - last_screen.y;
                if dx == 0.0 && dy == 0.0 {
                    return Vec::new();
                }
                *last_screen = screen_pt;
                self.camera.pan_by(dx, dy);
                vec![self.viewport_changed(), Action::RenderNeeded]
            }
            InputState::MovingSelection { last_world, origins } => {
                let world = self.camera.screen_to_world(screen_pt);
                let dx = world.x - last_world.x;
                let dy = world.y - last_world.y;
                if dx == 0.0 && dy == 0.0 {
                    return Vec::new();
                }
                *last_world = world;
                let ids: Vec<ElementId> = origins.iter().map(|(id, _, _)| *id).collect();
                for id in &ids {
                    if let Some(el) = self.doc.get_mut(id) {
                        el.x += dx;
                        el.y += dy;
                    }
                }
                vec![Action::RenderNeeded]
            }
            InputState::DrawingElement { id, anchor_world } => {
                let world = self.camera.screen_to_world(screen_pt);
                let anchor = *anchor_world;
                let id = *id;
                if let Some(el) = self.doc.get_mut(&id) {
                    // Normalize so dragging up/left still yields a positive box.
                    el.x = anchor.x.min(world.x);
                    el.y = anchor.y.min(world.y);
                    el.width = (world.x - anchor.x).abs();
                    el.height = (world.y - anchor.y).abs();
                }
                vec![Action::RenderNeeded]
            }
        }
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Panning { .. } => vec![Action::SetCursor("default".to_owned())],
            InputState::MovingSelection { origins, .. } => {
                let moved = origins
                    .iter()
                    .any(|(id, ox, oy)| self.doc.get(id).is_some_and(|e| e.x != *ox || e.y != *oy));
                if moved {
                    vec![Action::ElementsChanged(self.doc.snapshot())]
                } else {
                    Vec::new()
                }
            }
            InputState::DrawingElement { id, .. } => self.finish_drawing(&id),
        }
    }

    /// The pointer left the canvas: any in-flight gesture is cancelled.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.cancel_gesture()
    }

    /// Wheel input zooms around the pointer. Modifier flags arrive with the
    /// event but do not change the behavior.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        self.camera.apply_zoom_delta(screen_pt, delta.dy);
        vec![self.viewport_changed(), Action::RenderNeeded]
    }

    pub fn on_key_down(&mut self, key: Key, _modifiers: Modifiers) -> Vec<Action> {
        match key.0.as_str() {
            "Delete" | "Backspace" => self.delete_selection(),
            "Escape" => {
                if matches!(self.input, InputState::Idle) {
                    if self.ui.selected_ids.is_empty() {
                        Vec::new()
                    } else {
                        self.ui.selected_ids.clear();
                        vec![self.selection_changed(), Action::RenderNeeded]
                    }
                } else {
                    self.cancel_gesture()
                }
            }
            _ => Vec::new(),
        }
    }

    // --- Queries ---

    /// The currently selected element ids.
    #[must_use]
    pub fn selection(&self) -> &HashSet<ElementId> {
        &self.ui.selected_ids
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// The currently active tool, if any.
    #[must_use]
    pub fn active_tool(&self) -> Option<Tool> {
        self.ui.active_tool
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.doc.get(id)
    }

    /// The element sequence, bottom to top.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        self.doc.elements()
    }

    // --- Internals ---

    fn primary_pointer_down(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        if self.ui.active_tool == Some(Tool::Hand) {
            self.input = InputState::Panning { last_screen: screen_pt };
            return vec![Action::SetCursor("grabbing".to_owned())];
        }

        let world = self.camera.screen_to_world(screen_pt);
        match hit::hit_test(world, &self.doc) {
            Some(id) => self.pointer_down_on_element(id, world, modifiers),
            None => self.pointer_down_on_background(screen_pt, world),
        }
    }

    fn pointer_down_on_element(&mut self, id: ElementId, world: Point, modifiers: Modifiers) -> Vec<Action> {
        let mut actions = Vec::new();

        // Clicking an element always yields an editable selection: a drawing
        // tool implicitly gives way to Select before the click applies.
        if self.ui.active_tool.is_some_and(Tool::is_drawing) {
            self.ui.active_tool = Some(Tool::Select);
            actions.push(Action::ToolChanged(Some(Tool::Select)));
        }

        if self.apply_click_selection(id, modifiers.shift) {
            actions.push(self.selection_changed());
            actions.push(Action::RenderNeeded);
        }

        // Dragging from a selected element moves the whole selection.
        if self.ui.selected_ids.contains(&id) {
            let origins = self
                .ui
                .selected_ids
                .iter()
                .filter_map(|sid| self.doc.get(sid).map(|e| (e.id, e.x, e.y)))
                .collect();
            self.input = InputState::MovingSelection { last_world: world, origins };
        }

        actions
    }

    fn pointer_down_on_background(&mut self, screen_pt: Point, world: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        let deselected = !self.ui.selected_ids.is_empty();

        match self.ui.active_tool {
            Some(tool) if tool.creates_element() => {
                self.ui.selected_ids.clear();
                if tool == Tool::Text {
                    // Text boxes are created at a fixed size on click.
                    let el = Element {
                        id: ElementId::new_v4(),
                        kind: ElementKind::Text,
                        x: world.x,
                        y: world.y,
                        width: TEXT_BOX_WIDTH,
                        height: TEXT_BOX_HEIGHT,
                        fill: DEFAULT_TEXT_FILL.to_owned(),
                        stroke: None,
                        text: Some("Text".to_owned()),
                    };
                    let id = el.id;
                    self.doc.push(el);
                    self.ui.selected_ids.insert(id);
                    self.ui.active_tool = Some(Tool::Select);
                    actions.push(self.selection_changed());
                    actions.push(Action::ElementsChanged(self.doc.snapshot()));
                    actions.push(Action::ToolChanged(Some(Tool::Select)));
                    actions.push(Action::RenderNeeded);
                } else {
                    let kind = if tool == Tool::Ellipse {
                        ElementKind::Ellipse
                    } else {
                        ElementKind::Rectangle
                    };
                    let el = Element {
                        id: ElementId::new_v4(),
                        kind,
                        x: world.x,
                        y: world.y,
                        width: 0.0,
                        height: 0.0,
                        fill: DEFAULT_FILL.to_owned(),
                        stroke: Some(DEFAULT_STROKE.to_owned()),
                        text: None,
                    };
                    let id = el.id;
                    self.doc.push(el);
                    self.ui.selected_ids.insert(id);
                    self.input = InputState::DrawingElement { id, anchor_world: world };
                    actions.push(self.selection_changed());
                    actions.push(Action::RenderNeeded);
                }
            }
            Some(tool) if tool.is_drawing() => {
                // Frame / line / polygon / pen: the tool participates in the
                // state machine but creation is not implemented.
                if deselected {
                    self.ui.selected_ids.clear();
                    actions.push(self.selection_changed());
                    actions.push(Action::RenderNeeded);
                }
            }
            _ => {
                // Select, Comment, or no tool: background click deselects and
                // starts a pan in the same gesture.
                if deselected {
                    self.ui.selected_ids.clear();
                    actions.push(self.selection_changed());
                    actions.push(Action::RenderNeeded);
                }
                self.input = InputState::Panning { last_screen: screen_pt };
                actions.push(Action::SetCursor("grabbing".to_owned()));
            }
        }

        actions
    }

    /// Shift toggles membership; a plain click replaces the set unless the
    /// element is already the sole selection. Returns whether the set changed.
    fn apply_click_selection(&mut self, id: ElementId, additive: bool) -> bool {
        if additive {
            if !self.ui.selected_ids.remove(&id) {
                self.ui.selected_ids.insert(id);
            }
            return true;
        }
        let already_sole = self.ui.selected_ids.len() == 1 && self.ui.selected_ids.contains(&id);
        if already_sole {
            return false;
        }
        self.ui.selected_ids.clear();
        self.ui.selected_ids.insert(id);
        true
    }

    fn delete_selection(&mut self) -> Vec<Action> {
        if self.ui.selected_ids.is_empty() {
            return Vec::new();
        }
        let ids: Vec<ElementId> = self.ui.selected_ids.drain().collect();
        for id in &ids {
            self.doc.remove(id);
        }
        vec![
            Action::ElementsChanged(self.doc.snapshot()),
            self.selection_changed(),
            Action::RenderNeeded,
        ]
    }

    fn cancel_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Panning { .. } => vec![Action::SetCursor("default".to_owned())],
            InputState::MovingSelection { origins, .. } => {
                for (id, ox, oy) in &origins {
                    if let Some(el) = self.doc.get_mut(id) {
                        el.x = *ox;
                        el.y = *oy;
                    }
                }
                vec![Action::RenderNeeded]
            }
            InputState::DrawingElement { id, .. } => {
                self.doc.remove(&id);
                self.ui.selected_ids.remove(&id);
                vec![self.selection_changed(), Action::RenderNeeded]
            }
        }
    }

    fn finish_drawing(&mut self, id: &ElementId) -> Vec<Action> {
        let mut actions = Vec::new();
        let keep = self
            .doc
            .get(id)
            .is_some_and(|e| e.width >= ELEMENT_MIN_SIZE && e.height >= ELEMENT_MIN_SIZE);
        if keep {
            actions.push(Action::ElementsChanged(self.doc.snapshot()));
        } else {
            // Degenerate drag: discard the provisional element.
            self.doc.remove(id);
            self.ui.selected_ids.remove(id);
            actions.push(self.selection_changed());
            actions.push(Action::RenderNeeded);
        }
        // Drawing hands back an editable pointer either way.
        self.ui.active_tool = Some(Tool::Select);
        actions.push(Action::ToolChanged(Some(Tool::Select)));
        actions
    }

    fn selection_changed(&self) -> Action {
        Action::SelectionChanged(self.ui.selected_ids.clone())
    }

    fn viewport_changed(&self) -> Action {
        Action::ViewportChanged {
            zoom: self.camera.zoom,
            pan: Point::new(self.camera.pan_x, self.camera.pan_y),
        }
    }
}

/// The full canvas engine. Wraps [`EngineCore`] and owns the browser canvas
/// element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    /// Update viewport dimensions and resize the canvas backing store to
    /// match the device pixel ratio.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((width_css * dpr).max(0.0).round() as u32);
        self.canvas.set_height((height_css * dpr).max(0.0).round() as u32);
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2d context is unavailable or a Canvas2D call
    /// fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(
            &ctx,
            &self.core.doc,
            &self.core.camera,
            &self.core.ui,
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }
}
