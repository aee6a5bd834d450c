//! Login page with a mock email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::data::User;
use crate::state::session::SessionState;

/// Login page. Any non-empty email/password pair "signs in" by storing a
/// user derived from the email; there is no authentication backend.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let submit = move || {
        let email_value = email.get();
        if email_value.trim().is_empty() || !email_value.contains('@') {
            error.set(Some("Please enter a valid email address."));
            return;
        }
        if password.get().is_empty() {
            error.set(Some("Please enter your password."));
            return;
        }
        let name = email_value
            .split('@')
            .next()
            .unwrap_or("Designer")
            .to_owned();
        log::info!("signing in as {email_value}");
        session.update(|s| {
            s.sign_in(User {
                id: format!("user-{name}"),
                name,
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

    let on_github = move |_| {
        log::info!("GitHub sign-in clicked; OAuth is not implemented");
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__logo">"Zenith"</h1>
                <p class="auth-card__tagline">"Design together, ship faster."</p>

                <form class="auth-card__form" on:submit=on_submit>
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

                    {move || error.get().map(|msg| view! { <p class="auth-card__error">{msg}</p> })}

                    <button class="btn btn--primary auth-card__submit" type="submit">
                        "Sign In"
                    </button>
                </form>

                <button class="btn auth-card__oauth" on:click=on_github>
                    "Continue with GitHub"
                </button>

                <p class="auth-card__alt">
                    "No account? " <a href="/registration">"Sign Up"</a>
                </p>
            </div>
        </div>
    }
}
