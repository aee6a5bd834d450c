//! Editor page — the main workspace layout.

use leptos::prelude::*;

use crate::components::canvas_host::{CanvasHost, EngineHandle};
use crate::components::header::Header;
use crate::components::inspector_panel::InspectorPanel;
use crate::components::layers_panel::LayersPanel;
use crate::components::status_bar::StatusBar;
use crate::components::toolbar::Toolbar;
use crate::state::editor::EditorState;

/// Editor page — composes header, toolbar, panels, canvas, and status bar in
/// a grid layout. The [`EngineHandle`] provided here is shared by the canvas
/// host and the layers panel so both talk to the same engine instance.
#[component]
pub fn EditorPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    provide_context(EngineHandle::default());

    let file_name = move || editor.with(|e| e.file_name.clone());
    let on_rename = move |ev| {
        editor.update(|e| e.file_name = event_target_value(&ev));
    };

    // There is no persistence; saving logs a JSON snapshot of the sequence.
    let on_save = move |_| {
        let snapshot = editor.with_untracked(|e| {
            serde_json::to_string(&e.elements).unwrap_or_else(|err| format!("<serialize failed: {err}>"))
        });
        log::info!("save requested; snapshot: {snapshot}");
    };

    view! {
        <div class="editor">
            <Header show_file_actions=true/>
            <div class="editor__filebar">
                <input
                    class="editor__filename"
                    type="text"
                    prop:value=file_name
                    on:input=on_rename
                    title="File name"
                />
                <button class="btn" on:click=on_save>
                    "Save"
                </button>
                <Toolbar/>
            </div>
            <div class="editor__body">
                <LayersPanel/>
                <main class="editor__canvas">
                    <CanvasHost/>
                </main>
                <InspectorPanel/>
            </div>
            <StatusBar/>
        </div>
    }
}
