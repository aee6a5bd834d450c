//! User profile page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::state::session::SessionState;

/// Profile page over the in-memory session user: edit display name and
/// email, or sign out.
#[component]
pub fn UserProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let initial_user = session.get_untracked().user;
    let name = RwSignal::new(initial_user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = RwSignal::new(initial_user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let saved = RwSignal::new(false);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        session.update(|s| {
            if let Some(user) = s.user.as_mut() {
                user.name = name.get().trim().to_owned();
                user.email = email.get().trim().to_owned();
            }
        });
        saved.set(true);
        log::info!("profile saved");
    };

    let on_sign_out = move |_| {
        session.update(SessionState::sign_out);
        navigate("/login", NavigateOptions::default());
    };

    let avatar_initial = move || session.with(SessionState::initial);

    view! {
        <div class="profile-page">
            <Header/>
            <main class="profile">
                <h1 class="profile__title">"Your profile"</h1>
                <div class="profile__avatar">{avatar_initial}</div>

                <form class="profile__form" on:submit=on_save>
                    <label class="profile__label">
                        "Display name"
                        <input
                            class="profile__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                saved.set(false);
                                name.set(event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="profile__label">
                        "Email"
                        <input
                            class="profile__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                saved.set(false);
                                email.set(event_target_value(&ev));
                            }
                        />
                    </label>

                    <div class="profile__actions">
                        <button class="btn btn--primary" type="submit">
                            {move || if saved.get() { "Saved" } else { "Save changes" }}
                        </button>
                        <button class="btn" type="button" on:click=on_sign_out>
                            "Sign Out"
                        </button>
                    </div>
                </form>
            </main>
            <Footer/>
        </div>
    }
}
