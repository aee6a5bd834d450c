//! Catch-all page for unknown routes.

use leptos::prelude::*;

/// Not-found fallback.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <a class="btn" href="/">
                "Back to dashboard"
            </a>
        </div>
    }
}
