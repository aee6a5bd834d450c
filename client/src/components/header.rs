//! Top application header: logo, file actions, dark-mode toggle, avatar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::theme;

/// Application header.
///
/// `show_file_actions` adds the editor's Share / Present buttons; the
/// dashboard and auxiliary pages render the plain variant.
#[component]
pub fn Header(#[prop(optional)] show_file_actions: bool) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let go = move |path: &str| {
        navigate(path, NavigateOptions::default());
    };

    let go_home = {
        let go = go.clone();
        move |_| go("/")
    };
    let go_share = {
        let go = go.clone();
        move |_| {
            log::info!("share requested from header");
            go("/share-modal");
        }
    };
    let go_present = {
        let go = go.clone();
        move |_| {
            log::info!("present requested from header");
            go("/prototype-view");
        }
    };
    let go_profile = move |_| go("/user-profile");

    let on_toggle_theme = move |_| {
        let enabled = theme::toggle();
        log::debug!("dark mode {}", if enabled { "enabled" } else { "disabled" });
    };

    let initial = move || session.with(SessionState::initial);
    let user_name = move || {
        session.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_else(|| "Guest".to_owned()))
    };

    view! {
        <header class="header">
            <button class="header__logo" on:click=go_home>
                "Zenith"
            </button>

            <span class="header__spacer"></span>

            <Show when=move || show_file_actions>
                <button class="btn" on:click=go_share.clone()>
                    "Share"
                </button>
                <button class="btn btn--primary" on:click=go_present.clone()>
                    "Present"
                </button>
            </Show>

            <button class="header__icon-btn" title="Toggle dark mode" on:click=on_toggle_theme>
                "\u{263E}"
            </button>

            <button class="header__avatar" title=user_name on:click=go_profile>
                {initial}
            </button>
        </header>
    }
}
