//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, editor::EditorPage, login::LoginPage, not_found::NotFoundPage,
    profile::UserProfilePage, prototype::PrototypeViewPage, registration::RegistrationPage,
    share::ShareModalPage,
};
use crate::state::{editor::EditorState, files::FilesState, session::SessionState, view::CanvasViewState};
use crate::util::theme;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Reactive state contexts for all child components. Everything is seeded
    // from mock data — there is no backend to fetch from.
    let session = RwSignal::new(SessionState::seeded());
    let files = RwSignal::new(FilesState::seeded());
    let editor = RwSignal::new(EditorState::seeded());
    let canvas_view = RwSignal::new(CanvasViewState::default());

    provide_context(session);
    provide_context(files);
    provide_context(editor);
    provide_context(canvas_view);

    // Apply the persisted dark-mode preference once on startup.
    Effect::new(move || {
        theme::apply(theme::read_preference());
    });

    view! {
        <Title text="Zenith"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("editor") view=EditorPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("registration") view=RegistrationPage/>
                <Route path=StaticSegment("prototype-view") view=PrototypeViewPage/>
                <Route path=StaticSegment("share-modal") view=ShareModalPage/>
                <Route path=StaticSegment("user-profile") view=UserProfilePage/>
            </Routes>
        </Router>
    }
}
