//! Registration page with a mock sign-up form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::data::User;
use crate::state::session::SessionState;

/// Registration page. Validates the form shape locally and stores the new
/// user in the in-memory session; nothing is persisted.
#[component]
pub fn RegistrationPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let submit = move || {
        if name.get().trim().is_empty() {
            error.set(Some("Please enter your name."));
            return;
        }
        let email_value = email.get();
        if !email_value.contains('@') {
            error.set(Some("Please enter a valid email address."));
            return;
        }
        if password.get().len() < 8 {
            error.set(Some("Password must be at least 8 characters."));
            return;
        }
        if password.get() != confirm.get() {
            error.set(Some("Passwords do not match."));
            return;
        }

        let display_name = name.get().trim().to_owned();
        log::info!("registered {email_value}");
        session.update(|s| {
            s.sign_in(User {
                id: format!("user-{}", uuid::Uuid::new_v4()),
                name: display_name,
                email: email_value.trim().to_owned(),
                avatar_url: None,
            });
        });
        navigate("/", NavigateOptions::default());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__logo">"Zenith"</h1>
                <p class="auth-card__tagline">"Create your account"</p>

                <form class="auth-card__form" on:submit=on_submit>
                    <label class="auth-card__label">
                        "Name"
                        <input
                            class="auth-card__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-card__label">
                        "Email"
                        <input
                            class="auth-card__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-card__label">
                        "Password"
                        <input
                            class="auth-card__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-card__label">
                        "Confirm password"
                        <input
                            class="auth-card__input"
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>

                    {move || error.get().map(|msg| view! { <p class="auth-card__error">{msg}</p> })}

                    <button class="btn btn--primary auth-card__submit" type="submit">
                        "Create Account"
                    </button>
                </form>

                <p class="auth-card__alt">
                    "Already have an account? " <a href="/login">"Sign In"</a>
                </p>
            </div>
        </div>
    }
}
