//! Prototype view — read-only preview of a frame.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::data;
use crate::state::editor::EditorState;
use crate::state::view::CanvasViewState;

/// Prototype view page. Renders a fixed frame through the same canvas host
/// the editor uses, but read-only: clicks probe hotspots (logged), and the
/// wheel still zooms for inspection.
#[component]
pub fn PrototypeViewPage() -> impl IntoView {
    // Shadow the app-wide editor and telemetry state with local copies so
    // the preview never touches the real working file.
    provide_context(RwSignal::new(EditorState::with_elements(data::prototype_elements())));
    provide_context(RwSignal::new(CanvasViewState::default()));

    view! {
        <div class="prototype">
            <header class="prototype__bar">
                <a class="btn" href="/editor">
                    "\u{2190} Back to editor"
                </a>
                <span class="prototype__title">"Prototype Preview"</span>
                <span class="prototype__hint">"Click elements to probe hotspots"</span>
            </header>
            <main class="prototype__stage">
                <CanvasHost read_only=true/>
            </main>
        </div>
    }
}
