//! REST helpers for the identity service and document store.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native (tests, non-browser builds): stubs returning errors since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure carries the backend-provided message so the UI shows
//! exactly what the server said. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::backend::Backend;
use super::error::NetError;
use super::types::Identity;
#[cfg(feature = "hydrate")]
use super::types::NewPhotoRecord;

/// Extract the backend's error message from a non-OK response body.
///
/// The backend sends `{"message": "..."}` on errors; when the body is not in
/// that shape the status code becomes the message.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn error_message_from_body(status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => format!("request failed: {status}"),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn credentials_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

/// Create an account via `POST {api}/v1/auth/signup`.
///
/// # Errors
///
/// Returns [`NetError::Auth`] with the backend-provided message on failure.
pub async fn sign_up(backend: &Backend, email: &str, password: &str) -> Result<Identity, NetError> {
    post_credentials(backend, "signup", email, password).await
}

/// Authenticate via `POST {api}/v1/auth/login`.
///
/// # Errors
///
/// Returns [`NetError::Auth`] with the backend-provided message on failure.
pub async fn sign_in(backend: &Backend, email: &str, password: &str) -> Result<Identity, NetError> {
    post_credentials(backend, "login", email, password).await
}

/// End the session via `POST {api}/v1/auth/logout`.
///
/// Fire-and-forget: the session watcher observes the resulting absence event
/// on the auth channel, so failures are only logged.
pub async fn sign_out(backend: &Backend) {
    #[cfg(feature = "hydrate")]
    {
        let result = gloo_net::http::Request::post(&backend.auth_endpoint("logout"))
            .send()
            .await;
        if let Err(err) = result {
            leptos::logging::warn!("logout request failed: {err}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _unused = backend;
    }
}

async fn post_credentials(
    backend: &Backend,
    action: &str,
    email: &str,
    password: &str,
) -> Result<Identity, NetError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&backend.auth_endpoint(action))
            .json(&credentials_payload(email, password))
            .map_err(|e| NetError::Auth(e.to_string()))?
            .send()
            .await
            .map_err(|e| NetError::Auth(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NetError::Auth(error_message_from_body(resp.status(), &body)));
        }
        resp.json::<Identity>()
            .await
            .map_err(|e| NetError::Auth(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _unused = (backend, action, email, password);
        Err(NetError::Auth("not available outside the browser".to_owned()))
    }
}

/// Resolve a stored blob to its public download URL via
/// `GET {api}/v1/storage/{key}/url`.
///
/// # Errors
///
/// Returns [`NetError::Upload`] with the backend-provided message on failure.
#[cfg(feature = "hydrate")]
pub async fn public_url(backend: &Backend, key: &str) -> Result<String, NetError> {
    #[derive(serde::Deserialize)]
    struct UrlResponse {
        url: String,
    }
    let resp = gloo_net::http::Request::get(&backend.storage_url_endpoint(key))
        .send()
        .await
        .map_err(|e| NetError::Upload(e.to_string()))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(NetError::Upload(error_message_from_body(resp.status(), &body)));
    }
    let body: UrlResponse = resp
        .json()
        .await
        .map_err(|e| NetError::Upload(e.to_string()))?;
    Ok(body.url)
}

/// Write one photo metadata record via `POST {api}/v1/photos`.
///
/// The document store assigns the id and the `created_at` timestamp.
///
/// # Errors
///
/// Returns [`NetError::Upload`] with the backend-provided message on failure.
#[cfg(feature = "hydrate")]
pub async fn create_photo_record(backend: &Backend, record: &NewPhotoRecord) -> Result<String, NetError> {
    #[derive(serde::Deserialize)]
    struct CreatedResponse {
        id: String,
    }
    let resp = gloo_net::http::Request::post(&backend.photos_endpoint())
        .json(record)
        .map_err(|e| NetError::Upload(e.to_string()))?
        .send()
        .await
        .map_err(|e| NetError::Upload(e.to_string()))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(NetError::Upload(error_message_from_body(resp.status(), &body)));
    }
    let body: CreatedResponse = resp
        .json()
        .await
        .map_err(|e| NetError::Upload(e.to_string()))?;
    Ok(body.id)
}
