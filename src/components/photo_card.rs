//! One gallery tile linking to the full-size photo.

use leptos::prelude::*;

use crate::net::types::PhotoRecord;

/// A clickable thumbnail opening the stored photo in a new tab.
#[component]
pub fn PhotoCard(photo: PhotoRecord) -> impl IntoView {
    let href = photo.url.clone();

    view! {
        <a class="photo-card" href=href target="_blank" rel="noreferrer">
            <img class="photo-card__image" src=photo.url alt=photo.name loading="lazy"/>
        </a>
    }
}
