//! Dashboard page: the file browser grid.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::file_card::FileCard;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::state::files::FilesState;

const NAV_SECTIONS: &[&str] = &["Recents", "Drafts", "Shared with me", "Trash"];

/// Dashboard page — sidebar navigation plus a card grid of the mock
/// files/folders, with a "New File" entry point into the editor.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let files = expect_context::<RwSignal<FilesState>>();
    let navigate = use_navigate();

    let on_new_file = move |_| {
        log::info!("creating a new file");
        navigate("/editor", NavigateOptions::default());
    };

    let nav = NAV_SECTIONS
        .iter()
        .map(|section| {
            let on_click = move |_| {
                log::info!("dashboard section selected: {section}; section filters are not implemented");
            };
            view! {
                <li>
                    <button class="dashboard__nav-item" on:click=on_click>
                        {*section}
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let cards = move || {
        files.with(|f| {
            f.items
                .iter()
                .cloned()
                .map(|item| view! { <FileCard item=item/> })
                .collect::<Vec<_>>()
        })
    };

    let is_empty = move || files.with(|f| f.items.is_empty());

    view! {
        <div class="dashboard">
            <Header/>
            <div class="dashboard__body">
                <nav class="dashboard__sidebar">
                    <ul>{nav}</ul>
                </nav>
                <main class="dashboard__main">
                    <div class="dashboard__header">
                        <h1>"Files"</h1>
                        <button class="btn btn--primary" on:click=on_new_file>
                            "+ New File"
                        </button>
                    </div>
                    <Show
                        when=move || !is_empty()
                        fallback=|| view! {
                            <p class="dashboard__empty">
                                "Nothing here yet. Create a new file to get started."
                            </p>
                        }
                    >
                        <div class="dashboard__grid">{cards}</div>
                    </Show>
                </main>
            </div>
            <Footer/>
        </div>
    }
}
