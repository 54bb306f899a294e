//! Root application component with context providers and watcher tasks.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::net::backend::Backend;
use crate::pages::home::HomePage;
use crate::state::gallery::GalleryState;
use crate::state::session::SessionState;
use crate::state::upload::UploadState;

/// Root application component.
///
/// Constructs the backend handle once, provides all shared state contexts,
/// and spawns the two page-lifetime subscriptions (auth events, gallery
/// query) with alive-flags released on teardown.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let backend = Backend::from_build_env();
    let session = RwSignal::new(SessionState::default());
    let gallery = RwSignal::new(GalleryState::default());
    let upload = RwSignal::new(UploadState::default());

    provide_context(backend.clone());
    provide_context(session);
    provide_context(gallery);
    provide_context(upload);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::atomic::Ordering;

        let session_alive = crate::net::feed::spawn_session_watcher(backend.clone(), session);
        let gallery_alive = crate::net::feed::spawn_gallery_watcher(backend, gallery);
        on_cleanup(move || {
            session_alive.store(false, Ordering::Relaxed);
            gallery_alive.store(false, Ordering::Relaxed);
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/snapwall.css"/>
        <Title text="Snapwall"/>

        <HomePage/>
    }
}
