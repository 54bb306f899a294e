//! File-input control driving the upload pipeline.
//!
//! The input accepts camera captures on mobile. Selecting nothing is a
//! silent no-op; everything else is handled by `net::upload::run`, including
//! the single-flight guard and the 10MB ceiling.

use leptos::prelude::*;

use crate::net::backend::Backend;
use crate::state::session::SessionState;
use crate::state::upload::UploadState;

/// Upload panel with advisory limit text, progress line, and error line.
#[component]
pub fn UploadPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let upload = expect_context::<RwSignal<UploadState>>();
    let backend = expect_context::<Backend>();

    let on_file_change = move |ev: leptos::ev::Event| {
        let backend = backend.clone();
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = selected_file(&ev) else {
                return;
            };
            // Tag ownership with the session at selection time.
            let identity = session.get_untracked().user;
            leptos::task::spawn_local(crate::net::upload::run(backend, identity, upload, file));
        }
        #[cfg(not(feature = "hydrate"))]
        drop((backend, ev));
    };

    view! {
        <section class="panel">
            <div class="panel__head">
                <strong>"Add a photo"</strong>
                <span class="panel__hint">"Max 10MB"</span>
            </div>
            <label class="upload__label">
                <input
                    class="upload__input"
                    type="file"
                    accept="image/*"
                    capture="environment"
                    on:change=on_file_change
                />
            </label>
            <Show when=move || upload.get().uploading>
                <p class="upload__progress">
                    {move || format!("Uploading... {}%", upload.get().percent)}
                </p>
            </Show>
            <Show when=move || upload.get().error.is_some()>
                <p class="upload__error">{move || upload.get().error.unwrap_or_default()}</p>
            </Show>
        </section>
    }
}

/// First file of the change event's input element, if any.
#[cfg(feature = "hydrate")]
fn selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}
