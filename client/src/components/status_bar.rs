//! Bottom status bar: zoom, pan, cursor position, and element count.

use leptos::prelude::*;

use crate::state::editor::EditorState;
use crate::state::view::CanvasViewState;

/// Status bar fed by the viewport-changed telemetry.
#[component]
pub fn StatusBar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();

    let file_name = move || editor.with(|e| e.file_name.clone());
    let element_count = move || editor.with(|e| e.elements.len());
    let zoom = move || canvas_view.with(CanvasViewState::zoom_percent);
    let pan = move || canvas_view.with(|v| format!("({:.0}, {:.0})", v.pan_x, v.pan_y));
    let cursor = move || {
        canvas_view.with(|v| {
            v.cursor_world
                .map_or_else(String::new, |(x, y)| format!("{x:.0}, {y:.0}"))
        })
    };
    let render_ms = move || {
        canvas_view.with(|v| {
            v.last_render_ms
                .map_or_else(String::new, |ms| format!("{ms:.1} ms"))
        })
    };

    view! {
        <div class="status-bar">
            <span class="status-bar__file">{file_name}</span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__count">{move || format!("{} elements", element_count())}</span>
            <span class="status-bar__spacer"></span>
            <span class="status-bar__render">{render_ms}</span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__cursor">{cursor}</span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__pan">{move || format!("Pan: {}", pan())}</span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__zoom">{move || format!("Zoom: {}", zoom())}</span>
        </div>
    }
}
