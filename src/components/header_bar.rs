//! Header card: title, session status, and the logout affordance.

use leptos::prelude::*;

use crate::net::backend::Backend;
use crate::state::session::SessionState;

/// Header bar showing who is signed in (or that nobody is).
///
/// Logout is fire-and-forget: the session watcher observes the resulting
/// absence event, so no local session state is touched here.
#[component]
pub fn HeaderBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let backend = expect_context::<Backend>();

    view! {
        <header class="header">
            <div class="header__card">
                <div>
                    <h1 class="header__title">"Snapwall"</h1>
                    <p class="header__subtitle">"Add photos & sign in with email"</p>
                </div>
                <div class="header__session">
                    {move || {
                        let state = session.get();
                        if state.loading {
                            view! { <span class="header__muted">"Loading..."</span> }.into_any()
                        } else if let Some(user) = state.user {
                            let backend = backend.clone();
                            let on_logout = move |_| {
                                let backend = backend.clone();
                                #[cfg(feature = "hydrate")]
                                leptos::task::spawn_local(async move {
                                    crate::net::api::sign_out(&backend).await;
                                });
                                #[cfg(not(feature = "hydrate"))]
                                drop(backend);
                            };
                            view! {
                                <div class="header__user">
                                    <span class="header__email">{user.email}</span>
                                    <button class="header__logout" on:click=on_logout>
                                        "Logout"
                                    </button>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! { <span class="header__muted">"Not signed in"</span> }.into_any()
                        }
                    }}
                </div>
            </div>
        </header>
    }
}
