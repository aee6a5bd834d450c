//! Bridge component between the Leptos UI and the imperative `canvas::Engine`.
//!
//! The engine owns the authoritative document/selection/viewport state and
//! all render-time concerns; this host maps DOM events into engine calls and
//! folds the returned [`Action`]s back into the reactive state the chrome
//! reads. Sibling components (layers panel, toolbar) reach the same engine
//! instance through [`EngineHandle`].

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use canvas::engine::{Action, Engine};
use canvas::input::{Key, WheelDelta};

use crate::state::editor::EditorState;
use crate::state::view::CanvasViewState;
use crate::util::canvas_input::{
    map_button, map_modifiers, pointer_point, should_prevent_default_key, wheel_point,
};

/// Shared handle to the engine. Empty until the canvas element mounts.
///
/// The engine itself is not `Send`; the handle parks it in thread-local
/// arena storage so the handle can travel through context and reactive
/// closures freely.
#[derive(Clone, Copy)]
pub struct EngineHandle(StoredValue<Rc<RefCell<Option<Engine>>>, LocalStorage>);

impl Default for EngineHandle {
    fn default() -> Self {
        Self(StoredValue::new_local(Rc::new(RefCell::new(None))))
    }
}

impl EngineHandle {
    fn cell(self) -> Option<Rc<RefCell<Option<Engine>>>> {
        self.0.try_get_value()
    }

    /// Run `f` with the mounted engine. Returns `None` before the canvas
    /// mounts or after the owning page is torn down.
    pub fn with_engine<R>(self, f: impl FnOnce(&mut Engine) -> R) -> Option<R> {
        let cell = self.cell()?;
        let mut borrow = cell.borrow_mut();
        borrow.as_mut().map(f)
    }

    fn install(self, engine: Engine) {
        if let Some(cell) = self.cell() {
            *cell.borrow_mut() = Some(engine);
        }
    }

    fn is_mounted(self) -> bool {
        self.cell().is_some_and(|cell| cell.borrow().is_some())
    }
}

/// Fold engine actions into the reactive state and redraw when asked.
pub fn process_actions(
    handle: EngineHandle,
    actions: Vec<Action>,
    editor: RwSignal<EditorState>,
    canvas_view: RwSignal<CanvasViewState>,
) {
    let mut needs_render = false;
    for action in &actions {
        match action {
            Action::RenderNeeded => needs_render = true,
            Action::SelectionChanged(_) | Action::ElementsChanged(_) | Action::ToolChanged(_) => {
                editor.update(|e| e.apply_action(action));
            }
            Action::ViewportChanged { .. } | Action::SetCursor(_) => {
                canvas_view.update(|v| v.apply_action(action));
            }
        }
    }
    if needs_render {
        render_now(handle, canvas_view);
    }
}

/// Render and record how long the draw took for the status readout.
fn render_now(handle: EngineHandle, canvas_view: RwSignal<CanvasViewState>) {
    let started_ms = js_sys::Date::now();
    if let Some(Err(err)) = handle.with_engine(|engine| engine.render()) {
        log::warn!("canvas render failed: {err:?}");
    }
    let elapsed_ms = (js_sys::Date::now() - started_ms).max(0.0);
    canvas_view.update(|v| v.last_render_ms = Some(elapsed_ms));
}

/// Read the canvas element's CSS dimensions and device pixel ratio, then
/// push them to the engine. Called on mount and again on every gesture start
/// so coordinate transforms stay accurate across window resizes.
fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    let dpr = window.device_pixel_ratio().max(1.0);
    engine.set_viewport(width, height, dpr);
}

/// In the read-only prototype view a click is a hotspot probe, not an edit.
fn report_prototype_hit(handle: EngineHandle, ev: &leptos::ev::PointerEvent) {
    let screen = pointer_point(ev);
    let hit = handle.with_engine(|engine| {
        let world = engine.core.camera.screen_to_world(screen);
        canvas::hit::hit_test(world, &engine.core.doc)
    });
    match hit.flatten() {
        // A real prototype would follow the hotspot to another frame here.
        Some(id) => log::info!("prototype hotspot clicked: {id}"),
        None => log::debug!("prototype background clicked"),
    }
}

/// Canvas host — mounts the `<canvas>` element, binds the engine to it, and
/// wires pointer/wheel/keyboard events through the engine.
#[component]
pub fn CanvasHost(#[prop(optional)] read_only: bool) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();
    let handle = use_context::<EngineHandle>().unwrap_or_default();

    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // Mount: bind the engine to the canvas element and seed the document.
    Effect::new(move || {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if handle.is_mounted() {
            return;
        }
        let mut engine = Engine::new(canvas);
        sync_viewport(&mut engine, &canvas_ref);
        engine.core.load_elements(editor.get_untracked().elements);
        handle.install(engine);
        render_now(handle, canvas_view);
    });

    // Push toolbar intent into the engine; the engine answers with
    // `ToolChanged` so the mirror settles on whatever it accepted.
    Effect::new(move || {
        let tool = editor.with(|e| e.active_tool);
        let Some(actions) = handle.with_engine(|engine| match tool {
            Some(t) => engine.core.set_tool(t),
            None => engine.core.clear_tool(),
        }) else {
            return;
        };
        process_actions(handle, actions, editor, canvas_view);
    });

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if read_only {
            report_prototype_hit(handle, &ev);
            return;
        }
        ev.prevent_default();
        if let Some(canvas) = canvas_ref.get_untracked() {
            if let Err(err) = canvas.focus() {
                log::debug!("canvas focus failed: {err:?}");
            }
        }
        let Some(actions) = handle.with_engine(|engine| {
            sync_viewport(engine, &canvas_ref);
            engine.core.on_pointer_down(
                pointer_point(&ev),
                map_button(ev.button()),
                map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key()),
            )
        }) else {
            return;
        };
        process_actions(handle, actions, editor, canvas_view);
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let screen = pointer_point(&ev);
        let Some((actions, world)) = handle.with_engine(|engine| {
            let world = engine.core.camera.screen_to_world(screen);
            let actions = if read_only {
                Vec::new()
            } else {
                engine.core.on_pointer_move(
                    screen,
                    map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key()),
                )
            };
            (actions, world)
        }) else {
            return;
        };
        canvas_view.update(|v| v.cursor_world = Some((world.x, world.y)));
        process_actions(handle, actions, editor, canvas_view);
    };

    let on_pointer_up = move |ev: leptos::ev::PointerEvent| {
        if read_only {
            return;
        }
        let Some(actions) = handle.with_engine(|engine| {
            engine.core.on_pointer_up(
                pointer_point(&ev),
                map_button(ev.button()),
                map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key()),
            )
        }) else {
            return;
        };
        process_actions(handle, actions, editor, canvas_view);
    };

    let on_pointer_leave = move |_ev: leptos::ev::PointerEvent| {
        canvas_view.update(|v| v.cursor_world = None);
        if read_only {
            return;
        }
        let Some(actions) = handle.with_engine(|engine| engine.core.on_pointer_leave()) else {
            return;
        };
        process_actions(handle, actions, editor, canvas_view);
    };

    let on_wheel = move |ev: leptos::ev::WheelEvent| {
        ev.prevent_default();
        let Some(actions) = handle.with_engine(|engine| {
            sync_viewport(engine, &canvas_ref);
            engine.core.on_wheel(
                wheel_point(&ev),
                WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() },
                map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key()),
            )
        }) else {
            return;
        };
        process_actions(handle, actions, editor, canvas_view);
    };

    let on_key_down = move |ev: leptos::ev::KeyboardEvent| {
        if read_only {
            return;
        }
        let key = ev.key();
        if should_prevent_default_key(&key) {
            ev.prevent_default();
        }
        let Some(actions) = handle.with_engine(|engine| {
            engine.core.on_key_down(
                Key(key),
                map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key()),
            )
        }) else {
            return;
        };
        process_actions(handle, actions, editor, canvas_view);
    };

    let cursor_style = move || canvas_view.with(|v| v.cursor.clone());

    view! {
        <div class="canvas-host">
            <canvas
                class="canvas-host__surface"
                node_ref=canvas_ref
                tabindex="0"
                style:cursor=cursor_style
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up
                on:pointerleave=on_pointer_leave
                on:wheel=on_wheel
                on:keydown=on_key_down
            >
                "Your browser does not support canvas."
            </canvas>
        </div>
    }
}
