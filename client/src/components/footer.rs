//! Bottom footer with product links.

use leptos::prelude::*;

/// Simple footer shown on non-editor pages.
#[component]
pub fn Footer() -> impl IntoView {
    let stub = |what: &'static str| {
        move |_| log::info!("footer link clicked: {what}")
    };

    view! {
        <footer class="footer">
            <span class="footer__copy">"\u{00A9} 2024 Zenith Design"</span>
            <span class="footer__spacer"></span>
            <button class="footer__link" on:click=stub("help")>
                "Help"
            </button>
            <button class="footer__link" on:click=stub("terms")>
                "Terms"
            </button>
            <button class="footer__link" on:click=stub("privacy")>
                "Privacy"
            </button>
        </footer>
    }
}
