//! Live WebSocket subscriptions: the auth channel and the gallery query.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app holds exactly two passive subscriptions for its whole lifetime,
//! each running as a local task with an alive-flag released in `on_cleanup`.
//! Reconnection with exponential backoff lives here; the UI layer never
//! retries. Stream errors are logged, not surfaced — the gallery keeps
//! showing the last good snapshot.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

#[cfg(any(test, feature = "hydrate"))]
use super::error::NetError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::FeedEvent;

#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

#[cfg(feature = "hydrate")]
use super::backend::{self, Backend};
#[cfg(feature = "hydrate")]
use crate::state::gallery::GalleryState;
#[cfg(feature = "hydrate")]
use crate::state::session::SessionState;

/// Parse one raw text frame from an events channel.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn parse_feed_event(raw: &str) -> Result<FeedEvent, NetError> {
    serde_json::from_str(raw).map_err(|e| NetError::Snapshot(e.to_string()))
}

/// Subscribe to the identity service's auth channel and mirror each event
/// into `session`. Returns the alive-flag; clearing it ends the task after
/// its next wakeup.
#[cfg(feature = "hydrate")]
pub fn spawn_session_watcher(backend: Backend, session: RwSignal<SessionState>) -> Arc<AtomicBool> {
    let alive = Arc::new(AtomicBool::new(true));
    let task_alive = alive.clone();
    leptos::task::spawn_local(async move {
        let url = backend::auth_events_url(&backend.resolved_ws_base());
        subscription_loop(task_alive, url, move |event| {
            if let FeedEvent::Auth { identity } = event {
                session.update(|s| s.apply_auth_event(identity));
            }
        })
        .await;
    });
    alive
}

/// Subscribe to the live gallery query and wholesale-replace the photo list
/// on every snapshot. Returns the alive-flag; clearing it ends the task
/// after its next wakeup.
#[cfg(feature = "hydrate")]
pub fn spawn_gallery_watcher(backend: Backend, gallery: RwSignal<GalleryState>) -> Arc<AtomicBool> {
    let alive = Arc::new(AtomicBool::new(true));
    let task_alive = alive.clone();
    leptos::task::spawn_local(async move {
        let url = backend::gallery_events_url(&backend.resolved_ws_base());
        subscription_loop(task_alive, url, move |event| {
            if let FeedEvent::Snapshot { records } = event {
                gallery.update(|g| g.apply_snapshot(records));
            }
        })
        .await;
    });
    alive
}

/// Connect, dispatch incoming events, and reconnect with exponential
/// backoff until the alive-flag clears.
#[cfg(feature = "hydrate")]
async fn subscription_loop(alive: Arc<AtomicBool>, url: String, mut apply: impl FnMut(FeedEvent)) {
    use futures::StreamExt;
    use gloo_net::websocket::{Message, futures::WebSocket};

    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    while alive.load(Ordering::Relaxed) {
        match WebSocket::open(&url) {
            Ok(ws) => {
                let (_write, mut read) = ws.split();
                while let Some(next) = read.next().await {
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    match next {
                        Ok(Message::Text(raw)) => match parse_feed_event(&raw) {
                            Ok(event) => apply(event),
                            Err(err) => {
                                leptos::logging::warn!("dropping malformed feed event: {err}");
                            }
                        },
                        Ok(Message::Bytes(_)) => {
                            leptos::logging::warn!("ignoring unexpected binary feed frame");
                        }
                        Err(err) => {
                            leptos::logging::warn!("feed stream error: {err}");
                            break;
                        }
                    }
                }
            }
            Err(err) => {
                leptos::logging::warn!("feed connect failed: {err}");
            }
        }

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}
