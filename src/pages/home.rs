//! The single page: header, auth form, upload control, public gallery.

use leptos::prelude::*;

use crate::components::auth_panel::AuthPanel;
use crate::components::gallery_panel::GalleryPanel;
use crate::components::header_bar::HeaderBar;
use crate::components::upload_panel::UploadPanel;
use crate::state::session::SessionState;

/// Mobile-first single-column layout. The auth panel is shown only while
/// signed out; upload and gallery are always visible.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="page">
            <HeaderBar/>
            <main class="page__main">
                <Show when=move || session.get().user.is_none()>
                    <AuthPanel/>
                </Show>
                <UploadPanel/>
                <GalleryPanel/>
            </main>
            <footer class="page__footer">"Made for sharing. Works great on phones."</footer>
        </div>
    }
}
