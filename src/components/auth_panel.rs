//! Email + password form with login and signup actions.
//!
//! DESIGN
//! ======
//! Credentials are validated only by the backend. On success the form is
//! cleared and the session watcher delivers the new identity; on failure the
//! backend's message is shown and the fields are left untouched.

use leptos::prelude::*;

use crate::net::backend::Backend;
use crate::state::session::SessionState;

/// Which identity-service endpoint a submit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthAction {
    Login,
    Signup,
}

/// Auth panel shown while signed out.
#[component]
pub fn AuthPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let backend = expect_context::<Backend>();
    let busy = RwSignal::new(false);

    let submit = move |action: AuthAction| {
        if busy.get() {
            return;
        }
        let backend = backend.clone();
        let (email, password) = {
            let state = session.get();
            (state.email.clone(), state.password.clone())
        };
        busy.set(true);
        session.update(|s| s.error = None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match action {
                AuthAction::Login => crate::net::api::sign_in(&backend, &email, &password).await,
                AuthAction::Signup => crate::net::api::sign_up(&backend, &email, &password).await,
            };
            match result {
                Ok(_) => session.update(SessionState::auth_succeeded),
                Err(err) => session.update(|s| s.auth_failed(err.message().to_owned())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            drop((backend, email, password, action));
            busy.set(false);
        }
    };
    let submit_login = submit.clone();
    let submit_signup = submit;

    view! {
        <section class="panel">
            <form class="auth-form">
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || session.get().email
                    on:input=move |ev| session.update(|s| s.email = event_target_value(&ev))
                />
                <input
                    class="auth-form__input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || session.get().password
                    on:input=move |ev| session.update(|s| s.password = event_target_value(&ev))
                />
                <div class="auth-form__actions">
                    <button
                        class="auth-form__button"
                        disabled=move || busy.get()
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            submit_login(AuthAction::Login);
                        }
                    >
                        "Login"
                    </button>
                    <button
                        class="auth-form__button auth-form__button--primary"
                        disabled=move || busy.get()
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            submit_signup(AuthAction::Signup);
                        }
                    >
                        "Sign up"
                    </button>
                </div>
                <Show when=move || session.get().error.is_some()>
                    <p class="auth-form__error">{move || session.get().error.unwrap_or_default()}</p>
                </Show>
                <p class="auth-form__note">"Use an email and password to create an account."</p>
            </form>
        </section>
    }
}
