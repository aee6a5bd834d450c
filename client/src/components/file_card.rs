//! Card component for file/folder items on the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::data::{FileItem, FileKind};
use crate::state::files::FilesState;

/// A clickable card representing a file or folder in the dashboard grid.
///
/// Files open the editor; folders are a logged stub (there is no folder
/// navigation in the mock data). Share jumps to the sharing screen, delete
/// removes the item from the in-memory list, rename is a logged stub.
#[component]
pub fn FileCard(item: FileItem) -> impl IntoView {
    let files = expect_context::<RwSignal<FilesState>>();
    let navigate = use_navigate();

    let id = item.id.clone();
    let name = item.name.clone();
    let kind = item.kind;

    let kind_icon = match kind {
        FileKind::File => "\u{1F4C4}",
        FileKind::Folder => "\u{1F4C1}",
    };

    let on_open = {
        let navigate = navigate.clone();
        let id = id.clone();
        move |_| match kind {
            FileKind::File => {
                log::info!("opening file {id}");
                navigate("/editor", NavigateOptions::default());
            }
            FileKind::Folder => {
                log::info!("folder {id} clicked; folder navigation is not implemented");
            }
        }
    };

    let on_share = {
        let navigate = navigate.clone();
        let id = id.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            log::info!("sharing file {id}");
            navigate("/share-modal", NavigateOptions::default());
        }
    };

    let on_rename = {
        let id = id.clone();
        let name = name.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            log::info!("rename requested for {id} (current name: {name}); rename dialog is not implemented");
        }
    };

    let on_delete = {
        let id = id.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            files.update(|f| {
                if f.remove(&id) {
                    log::info!("deleted {id}");
                }
            });
        }
    };

    let thumbnail = item.thumbnail_url.clone();

    view! {
        <div class="file-card" on:click=on_open>
            <div class="file-card__preview">
                {match thumbnail {
                    Some(url) => view! { <img class="file-card__thumb" src=url alt=name.clone()/> }.into_any(),
                    None => view! { <span class="file-card__icon">{kind_icon}</span> }.into_any(),
                }}
            </div>
            <div class="file-card__meta">
                <span class="file-card__name">{item.name.clone()}</span>
                <span class="file-card__modified">{item.last_modified.clone()}</span>
            </div>
            <div class="file-card__actions">
                <button class="file-card__action" title="Share" on:click=on_share>
                    "\u{1F517}"
                </button>
                <button class="file-card__action" title="Rename" on:click=on_rename>
                    "\u{270E}"
                </button>
                <button class="file-card__action" title="Delete" on:click=on_delete>
                    "\u{1F5D1}"
                </button>
            </div>
        </div>
    }
}
