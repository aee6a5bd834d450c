//! Left sidebar: layers list mirroring the element sequence.

use leptos::prelude::*;

use canvas::doc::{Element, ElementKind};

use crate::components::canvas_host::{EngineHandle, process_actions};
use crate::state::editor::EditorState;
use crate::state::view::CanvasViewState;

fn layer_label(el: &Element) -> String {
    match el.kind {
        ElementKind::Rectangle => "Rectangle".to_owned(),
        ElementKind::Ellipse => "Ellipse".to_owned(),
        ElementKind::Text => el.text.clone().unwrap_or_else(|| "Text".to_owned()),
    }
}

fn kind_glyph(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Rectangle => "\u{25A1}",
        ElementKind::Ellipse => "\u{25CB}",
        ElementKind::Text => "T",
    }
}

/// Layers list. Rows are shown topmost-first; clicking a row selects the
/// element through the engine (shift adds/removes), so canvas and chrome
/// stay in agreement.
#[component]
pub fn LayersPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();
    let handle = expect_context::<EngineHandle>();

    let rows = move || {
        editor.with(|e| {
            e.elements
                .iter()
                .rev()
                .map(|el| {
                    let id = el.id;
                    let label = layer_label(el);
                    let glyph = kind_glyph(el.kind);
                    let selected = e.is_selected(&id);

                    let on_click = move |ev: leptos::ev::MouseEvent| {
                        let Some(actions) = handle
                            .with_engine(|engine| engine.core.select_element(&id, ev.shift_key()))
                        else {
                            return;
                        };
                        process_actions(handle, actions, editor, canvas_view);
                    };

                    view! {
                        <li>
                            <button
                                class="layers-panel__row"
                                class:layers-panel__row--selected=selected
                                on:click=on_click
                            >
                                <span class="layers-panel__glyph">{glyph}</span>
                                <span class="layers-panel__label">{label}</span>
                            </button>
                        </li>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <aside class="layers-panel">
            <h2 class="layers-panel__title">"Layers"</h2>
            <Show
                when=move || editor.with(|e| !e.elements.is_empty())
                fallback=|| view! { <p class="layers-panel__empty">"No layers yet."</p> }
            >
                <ul class="layers-panel__list">{rows}</ul>
            </Show>
        </aside>
    }
}
