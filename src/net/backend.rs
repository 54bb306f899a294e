//! Backend connection handle and endpoint construction.
//!
//! DESIGN
//! ======
//! One explicitly constructed `Backend` value is created in `App` and shared
//! via Leptos context, replacing module-level client singletons. Base URLs
//! come from compile-time placeholders (`SNAPWALL_API_BASE`,
//! `SNAPWALL_WS_BASE`) so a deployment can point the client at its own
//! backend project without code changes.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

/// Connection configuration for the managed backend service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Backend {
    /// Base URL for REST endpoints, e.g. `https://api.example.com` or `/api`.
    pub api_base: String,
    /// Base URL for WebSocket endpoints, e.g. `wss://api.example.com`.
    /// Empty means "derive from the page origin at runtime".
    pub ws_base: String,
}

impl Backend {
    /// Build the backend handle from compile-time placeholders.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            api_base: option_env!("SNAPWALL_API_BASE").unwrap_or("/api").to_owned(),
            ws_base: option_env!("SNAPWALL_WS_BASE").unwrap_or("").to_owned(),
        }
    }

    /// REST endpoint for an identity-service action (`signup`, `login`, `logout`).
    #[must_use]
    pub fn auth_endpoint(&self, action: &str) -> String {
        format!("{}/v1/auth/{action}", self.api_base)
    }

    /// REST endpoint for uploading or addressing a stored blob.
    #[must_use]
    pub fn storage_endpoint(&self, key: &str) -> String {
        format!("{}/v1/storage/{key}", self.api_base)
    }

    /// REST endpoint resolving a stored blob to its public download URL.
    #[must_use]
    pub fn storage_url_endpoint(&self, key: &str) -> String {
        format!("{}/v1/storage/{key}/url", self.api_base)
    }

    /// REST endpoint for creating photo metadata records.
    #[must_use]
    pub fn photos_endpoint(&self) -> String {
        format!("{}/v1/photos", self.api_base)
    }

    /// Resolve the WebSocket base, deriving it from the page origin when the
    /// configured value is empty.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn resolved_ws_base(&self) -> String {
        if !self.ws_base.is_empty() {
            return self.ws_base.clone();
        }
        let location = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        let proto = if location.starts_with("https") { "wss" } else { "ws" };
        let host = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:3000".to_owned());
        format!("{proto}://{host}{}", self.api_base)
    }
}

/// WebSocket URL for the identity service's auth-event channel.
#[must_use]
pub fn auth_events_url(ws_base: &str) -> String {
    format!("{ws_base}/v1/events?channel=auth")
}

/// WebSocket URL for the live gallery query, ordered by creation time
/// descending. Ordering is delegated entirely to the backend.
#[must_use]
pub fn gallery_events_url(ws_base: &str) -> String {
    format!("{ws_base}/v1/events?channel=query&collection=photos&order_by=created_at&descending=true")
}
