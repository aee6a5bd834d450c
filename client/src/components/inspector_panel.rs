//! Right sidebar: properties readout for the current selection.

use leptos::prelude::*;

use canvas::doc::{Element, ElementKind};

use crate::state::editor::EditorState;

fn kind_name(kind: ElementKind) -> &'static str {
    match kind {
        ElementKind::Rectangle => "Rectangle",
        ElementKind::Ellipse => "Ellipse",
        ElementKind::Text => "Text",
    }
}

fn properties(el: &Element) -> impl IntoView + use<> {
    let fill = el.fill.clone();
    let swatch_style = format!("background-color: {fill}");

    view! {
        <div class="inspector__props">
            <h3 class="inspector__heading">"Element Properties"</h3>
            <div class="inspector__row">
                <span class="inspector__key">"Type"</span>
                <span class="inspector__value">{kind_name(el.kind)}</span>
            </div>
            <div class="inspector__row">
                <span class="inspector__key">"ID"</span>
                <span class="inspector__value inspector__value--mono">{el.id.to_string()}</span>
            </div>
            <div class="inspector__row">
                <span class="inspector__key">"Position"</span>
                <span class="inspector__value">{format!("X: {:.0}, Y: {:.0}", el.x, el.y)}</span>
            </div>
            <div class="inspector__row">
                <span class="inspector__key">"Size"</span>
                <span class="inspector__value">{format!("W: {:.0}, H: {:.0}", el.width, el.height)}</span>
            </div>
            <div class="inspector__row">
                <span class="inspector__key">"Fill"</span>
                <span class="inspector__swatch" style=swatch_style></span>
                <span class="inspector__value inspector__value--mono">{fill}</span>
            </div>
            {el.stroke.clone().map(|stroke| view! {
                <div class="inspector__row">
                    <span class="inspector__key">"Stroke"</span>
                    <span class="inspector__value inspector__value--mono">{stroke}</span>
                </div>
            })}
            {el.text.clone().map(|text| view! {
                <div class="inspector__row">
                    <span class="inspector__key">"Text"</span>
                    <span class="inspector__value">{text}</span>
                </div>
            })}
        </div>
    }
}

/// Properties inspector. Shows a hint when nothing is selected and a notice
/// for multi-selections; property *editing* is left to the hosting
/// application.
#[component]
pub fn InspectorPanel() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let body = move || {
        editor.with(|e| {
            if e.selected_ids.is_empty() {
                view! { <p class="inspector__hint">"Select an element to inspect its properties."</p> }
                    .into_any()
            } else if let Some(el) = e.sole_selected_element() {
                properties(el).into_any()
            } else {
                view! {
                    <p class="inspector__hint">
                        {format!("{} elements selected. Bulk editing is not available.", e.selected_ids.len())}
                    </p>
                }
                .into_any()
            }
        })
    };

    view! { <aside class="inspector">{body}</aside> }
}
