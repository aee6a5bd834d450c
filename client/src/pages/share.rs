//! Sharing screen: invite collaborators, manage access, copy a link.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::JsFuture;

use crate::components::header::Header;
use crate::data::{self, Collaborator, Permission};

/// How long the "Copied" notice stays up, in milliseconds.
const COPIED_NOTICE_MS: u32 = 2_000;

fn parse_permission(value: &str) -> Permission {
    if value == "edit" { Permission::Edit } else { Permission::View }
}

/// Copy `text` to the system clipboard, flipping `copied` while the notice
/// should show. Clipboard failures are logged, not surfaced.
fn copy_to_clipboard(text: String, copied: RwSignal<bool>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let clipboard = window.navigator().clipboard();
    leptos::task::spawn_local(async move {
        match JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => {
                copied.set(true);
                TimeoutFuture::new(COPIED_NOTICE_MS).await;
                copied.set(false);
            }
            Err(err) => log::warn!("clipboard write failed: {err:?}"),
        }
    });
}

/// Sharing screen for the current file. All collaborator state is held
/// in-memory; "inviting" appends to the local list.
#[component]
pub fn ShareModalPage() -> impl IntoView {
    let navigate = use_navigate();

    let file_name = "Project Alpha Design";
    let collaborators = RwSignal::new(data::mock_collaborators());
    let link = RwSignal::new(data::shareable_link("file-abc-123"));
    let link_permission = RwSignal::new(Permission::View);

    let invite_email = RwSignal::new(String::new());
    let invite_permission = RwSignal::new(Permission::View);
    let invite_error = RwSignal::new(None::<&'static str>);
    let copied = RwSignal::new(false);

    let on_invite = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email = invite_email.get();
        let email = email.trim();
        if !email.contains('@') {
            invite_error.set(Some("Please enter a valid email."));
            return;
        }
        if collaborators.with(|list| list.iter().any(|c| c.user.email == email)) {
            invite_error.set(Some("That person already has access."));
            return;
        }
        invite_error.set(None);
        let collaborator = data::collaborator_from_email(email, invite_permission.get());
        log::info!("invited {} with {:?} access", collaborator.user.email, collaborator.permission);
        collaborators.update(|list| list.push(collaborator));
        invite_email.set(String::new());
    };

    let on_copy = move |_| {
        copy_to_clipboard(link.get(), copied);
    };

    let on_link_permission = move |ev: leptos::ev::Event| {
        let permission = parse_permission(&event_target_value(&ev));
        link_permission.set(permission);
        log::info!("anyone with the link can now {:?}", permission);
    };

    let on_done = move |_| {
        navigate("/editor", NavigateOptions::default());
    };

    let rows = move || {
        collaborators
            .get()
            .into_iter()
            .map(|c: Collaborator| {
                let email = c.user.email.clone();
                let initial = c.user.name.chars().next().map(|ch| ch.to_uppercase().to_string());

                let on_permission = {
                    let email = email.clone();
                    move |ev: leptos::ev::Event| {
                        let permission = parse_permission(&event_target_value(&ev));
                        collaborators.update(|list| {
                            if let Some(entry) = list.iter_mut().find(|x| x.user.email == email) {
                                entry.permission = permission;
                            }
                        });
                    }
                };
                let on_remove = {
                    let email = email.clone();
                    move |_| {
                        collaborators.update(|list| list.retain(|x| x.user.email != email));
                    }
                };

                view! {
                    <li class="share__row">
                        <span class="share__avatar">{initial}</span>
                        <span class="share__who">
                            <span class="share__name">{c.user.name.clone()}</span>
                            <span class="share__email">{c.user.email.clone()}</span>
                        </span>
                        <select class="share__select" on:change=on_permission>
                            <option value="view" selected=c.permission == Permission::View>
                                {Permission::View.label()}
                            </option>
                            <option value="edit" selected=c.permission == Permission::Edit>
                                {Permission::Edit.label()}
                            </option>
                        </select>
                        <button class="share__remove" title="Remove access" on:click=on_remove>
                            "\u{2715}"
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="share-page">
            <Header/>
            <main class="share">
                <h1 class="share__title">{format!("Share \u{201C}{file_name}\u{201D}")}</h1>

                <form class="share__invite" on:submit=on_invite>
                    <input
                        class="share__input"
                        type="email"
                        placeholder="Invite by email"
                        prop:value=move || invite_email.get()
                        on:input=move |ev| invite_email.set(event_target_value(&ev))
                    />
                    <select
                        class="share__select"
                        on:change=move |ev| invite_permission.set(parse_permission(&event_target_value(&ev)))
                    >
                        <option value="view">{Permission::View.label()}</option>
                        <option value="edit">{Permission::Edit.label()}</option>
                    </select>
                    <button class="btn btn--primary" type="submit">
                        "Invite"
                    </button>
                </form>
                {move || invite_error.get().map(|msg| view! { <p class="share__error">{msg}</p> })}

                <h2 class="share__subtitle">"People with access"</h2>
                <ul class="share__list">{rows}</ul>

                <h2 class="share__subtitle">"Share link"</h2>
                <div class="share__link-row">
                    <input class="share__input share__input--link" type="text" readonly prop:value=move || link.get()/>
                    <select class="share__select" on:change=on_link_permission>
                        <option value="view" selected=move || link_permission.get() == Permission::View>
                            {Permission::View.label()}
                        </option>
                        <option value="edit" selected=move || link_permission.get() == Permission::Edit>
                            {Permission::Edit.label()}
                        </option>
                    </select>
                    <button class="btn" on:click=on_copy>
                        {move || if copied.get() { "Copied" } else { "Copy link" }}
                    </button>
                </div>

                <div class="share__actions">
                    <button class="btn btn--primary" on:click=on_done>
                        "Done"
                    </button>
                </div>
            </main>
        </div>
    }
}
