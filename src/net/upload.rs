//! Upload pipeline: blob transfer with progress, then one metadata record.
//!
//! DESIGN
//! ======
//! One upload at a time. The pipeline is linear: guard, size check, storage
//! key, resumable PUT with integer-percent progress, public-URL resolution,
//! metadata write, reset. Any failure surfaces the backend message, clears
//! the uploading flag, resets progress to zero, and writes no record. There
//! is no cancellation affordance and no automatic retry; a failed upload is
//! re-selected and resubmitted by the user.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

#[cfg(feature = "hydrate")]
use super::api;
#[cfg(feature = "hydrate")]
use super::backend::Backend;
#[cfg(feature = "hydrate")]
use super::error::NetError;
use super::types::{Identity, NewPhotoRecord};
#[cfg(feature = "hydrate")]
use crate::state::upload::UploadState;

/// Advertised and enforced upload ceiling: 10 MB.
pub const MAX_UPLOAD_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

/// Storage-key owner segment used when nobody is signed in.
pub const ANONYMOUS_OWNER: &str = "anonymous";

/// Build the blob-store key for one upload.
///
/// Combines owner, timestamp, and the original filename to avoid collisions;
/// this is namespacing, not security.
#[must_use]
pub fn storage_key(uid: Option<&str>, timestamp_ms: i64, filename: &str) -> String {
    format!("photos/{}_{timestamp_ms}_{filename}", uid.unwrap_or(ANONYMOUS_OWNER))
}

/// Integer percent complete, rounded to nearest, clamped to 0..=100.
#[must_use]
pub fn percent_complete(transferred: f64, total: f64) -> u32 {
    if total <= 0.0 {
        return 0;
    }
    let percent = (transferred / total * 100.0).round();
    percent.clamp(0.0, 100.0) as u32
}

/// Rejection message for files over [`MAX_UPLOAD_BYTES`].
#[must_use]
pub fn oversize_message(filename: &str) -> String {
    format!("{filename} is larger than the 10MB limit")
}

/// Metadata record for a completed upload, tagged with the identity
/// captured when the file was selected.
#[must_use]
pub fn metadata_record(identity: Option<&Identity>, url: String, name: String) -> NewPhotoRecord {
    NewPhotoRecord {
        url,
        uploader: identity.map(|i| i.email.clone()),
        uid: identity.map(|i| i.uid.clone()),
        name,
    }
}

/// Run one upload end to end, reflecting every transition into `upload`.
///
/// The caller passes the identity captured at selection time so the metadata
/// record is tagged with the session that started the upload, even if auth
/// state changes mid-transfer.
#[cfg(feature = "hydrate")]
pub async fn run(
    backend: Backend,
    identity: Option<Identity>,
    upload: RwSignal<UploadState>,
    file: web_sys::File,
) {
    let mut accepted = false;
    upload.update(|s| accepted = s.begin());
    if !accepted {
        // begin() recorded the rejection; the in-flight upload is untouched.
        return;
    }

    if file.size() > MAX_UPLOAD_BYTES {
        upload.update(|s| s.fail(oversize_message(&file.name())));
        return;
    }

    let key = storage_key(
        identity.as_ref().map(|i| i.uid.as_str()),
        js_sys::Date::now() as i64,
        &file.name(),
    );

    let transfer = put_blob(&backend.storage_endpoint(&key), &file, move |percent| {
        upload.update(|s| s.apply_progress(percent));
    })
    .await;
    if let Err(err) = transfer {
        upload.update(|s| s.fail(err.message().to_owned()));
        return;
    }

    // The terminal progress event can race the load event; pin the bar at
    // 100 before the completion branch runs.
    upload.update(|s| s.apply_progress(100));

    let url = match api::public_url(&backend, &key).await {
        Ok(url) => url,
        Err(err) => {
            upload.update(|s| s.fail(err.message().to_owned()));
            return;
        }
    };

    let record = metadata_record(identity.as_ref(), url, file.name());
    if let Err(err) = api::create_photo_record(&backend, &record).await {
        upload.update(|s| s.fail(err.message().to_owned()));
        return;
    }

    upload.update(UploadState::complete);
}

/// Resumable PUT of one file via browser XHR, reporting integer-percent
/// progress until the terminal load or error event.
#[cfg(feature = "hydrate")]
async fn put_blob(
    url: &str,
    file: &web_sys::File,
    mut on_progress: impl FnMut(u32) + 'static,
) -> Result<(), NetError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    fn setup_failed(msg: &str) -> NetError {
        NetError::Upload(msg.to_owned())
    }

    let xhr = web_sys::XmlHttpRequest::new().map_err(|_| setup_failed("could not create upload request"))?;
    xhr.open("PUT", url).map_err(|_| setup_failed("could not open upload request"))?;

    let (done_tx, done_rx) = oneshot::channel::<Result<(), String>>();
    let done_tx = Rc::new(RefCell::new(Some(done_tx)));

    let on_progress_cb = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |ev: web_sys::ProgressEvent| {
        if ev.length_computable() && ev.total() > 0.0 {
            on_progress(percent_complete(ev.loaded(), ev.total()));
        }
    });
    xhr.upload()
        .map_err(|_| setup_failed("upload progress channel unavailable"))?
        .set_onprogress(Some(on_progress_cb.as_ref().unchecked_ref()));

    let load_xhr = xhr.clone();
    let load_tx = done_tx.clone();
    let on_load_cb = Closure::<dyn FnMut()>::new(move || {
        let outcome = match load_xhr.status() {
            Ok(status) if (200..300).contains(&status) => Ok(()),
            Ok(status) => {
                let body = load_xhr.response_text().unwrap_or(None).unwrap_or_default();
                Err(api::error_message_from_body(status, &body))
            }
            Err(_) => Err("upload finished with unreadable status".to_owned()),
        };
        if let Some(tx) = load_tx.borrow_mut().take() {
            let _ = tx.send(outcome);
        }
    });
    xhr.set_onload(Some(on_load_cb.as_ref().unchecked_ref()));

    let error_tx = done_tx.clone();
    let on_error_cb = Closure::<dyn FnMut()>::new(move || {
        if let Some(tx) = error_tx.borrow_mut().take() {
            let _ = tx.send(Err("network error during upload".to_owned()));
        }
    });
    xhr.set_onerror(Some(on_error_cb.as_ref().unchecked_ref()));

    let blob: &web_sys::Blob = file.as_ref();
    xhr.send_with_opt_blob(Some(blob))
        .map_err(|_| setup_failed("could not start upload"))?;

    let outcome = done_rx.await.map_err(|_| setup_failed("upload interrupted"))?;

    // Callbacks must outlive the transfer; release them only once it ends.
    drop(on_progress_cb);
    drop(on_load_cb);
    drop(on_error_cb);

    outcome.map_err(NetError::Upload)
}
