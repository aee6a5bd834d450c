//! Floating toolbar for selecting the active design tool.

use leptos::prelude::*;

use canvas::input::Tool;

use crate::state::editor::EditorState;

/// Tool definition for the toolbar.
struct ToolDef {
    tool: Tool,
    label: &'static str,
    icon: &'static str,
}

const DESIGN_TOOLS: &[ToolDef] = &[
    ToolDef { tool: Tool::Select, label: "Select", icon: "\u{25B3}" },
    ToolDef { tool: Tool::Frame, label: "Frame", icon: "\u{2B1A}" },
    ToolDef { tool: Tool::Rectangle, label: "Rectangle", icon: "\u{25A1}" },
    ToolDef { tool: Tool::Ellipse, label: "Ellipse", icon: "\u{25CB}" },
    ToolDef { tool: Tool::Line, label: "Line", icon: "\u{2014}" },
    ToolDef { tool: Tool::Polygon, label: "Polygon", icon: "\u{2B20}" },
    ToolDef { tool: Tool::Pen, label: "Pen Tool", icon: "\u{2712}" },
    ToolDef { tool: Tool::Text, label: "Text Tool", icon: "T" },
];

const UTILITY_TOOLS: &[ToolDef] = &[
    ToolDef { tool: Tool::Hand, label: "Hand (Pan)", icon: "\u{270B}" },
    ToolDef { tool: Tool::Comment, label: "Comment", icon: "\u{275D}" },
];

/// One strip of tool buttons. Clicking the already-active tool is a no-op;
/// deselection goes through the explicit button instead.
fn tool_strip(tools: &'static [ToolDef], editor: RwSignal<EditorState>) -> impl IntoView {
    tools
        .iter()
        .map(|td| {
            let tool = td.tool;
            let label = td.label;
            let icon = td.icon;

            let is_active = move || editor.with(|e| e.active_tool == Some(tool));
            let on_click = move |_| {
                if editor.with_untracked(|e| e.active_tool == Some(tool)) {
                    log::debug!("tool {label} already active");
                    return;
                }
                editor.update(|e| e.active_tool = Some(tool));
            };

            view! {
                <button
                    class="toolbar__btn"
                    class:toolbar__btn--active=is_active
                    title=label
                    on:click=on_click
                >
                    {icon}
                </button>
            }
        })
        .collect::<Vec<_>>()
}

/// Horizontal toolbar with the design tools, utility tools, and an explicit
/// deselect-tool action.
#[component]
pub fn Toolbar() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let no_tool = move || editor.with(|e| e.active_tool.is_none());
    let on_deselect = move |_| {
        editor.update(|e| e.active_tool = None);
    };

    view! {
        <div class="toolbar">
            {tool_strip(DESIGN_TOOLS, editor)}
            <span class="toolbar__divider"></span>
            {tool_strip(UTILITY_TOOLS, editor)}
            <span class="toolbar__divider"></span>
            <button
                class="toolbar__btn"
                class:toolbar__btn--active=no_tool
                title="Deselect tool"
                on:click=on_deselect
            >
                "\u{2715}"
            </button>
        </div>
    }
}
