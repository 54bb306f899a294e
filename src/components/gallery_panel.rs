//! Public gallery: photo count and a three-column grid.
//!
//! Rendering is a pure projection of the last delivered snapshot; order is
//! exactly the backend's.

#[cfg(test)]
#[path = "gallery_panel_test.rs"]
mod gallery_panel_test;

use leptos::prelude::*;

use crate::components::photo_card::PhotoCard;
use crate::state::gallery::GalleryState;

/// Gallery panel with count, empty state, and photo grid.
#[component]
pub fn GalleryPanel() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();

    view! {
        <section class="panel">
            <div class="panel__head">
                <strong>"Public gallery"</strong>
                <span class="panel__hint">
                    {move || photo_count_label(gallery.get().photos.len())}
                </span>
            </div>
            {move || {
                let photos = gallery.get().photos;
                if photos.is_empty() {
                    view! {
                        <p class="gallery__empty">"No photos yet. Be the first to upload!"</p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="gallery__grid">
                            {photos
                                .into_iter()
                                .map(|photo| view! { <PhotoCard photo/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

/// Count caption next to the gallery heading.
fn photo_count_label(count: usize) -> String {
    if count == 1 {
        "1 photo".to_owned()
    } else {
        format!("{count} photos")
    }
}
