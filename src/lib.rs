//! # snapwall
//!
//! Leptos + WASM single-page client for a shared photo wall. Users sign up or
//! log in with email+password, upload photos from a phone camera or gallery,
//! and browse a public feed of everything uploaded so far.
//!
//! All durable state lives in an external managed backend (identity service,
//! blob store, document store with live queries). This crate is the browser
//! glue: it wires form and file-input events to the backend's HTTP/WebSocket
//! API and renders reactive snapshots of remote state. Browser-only code is
//! gated behind the `hydrate` feature so the crate compiles and tests
//! natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install panic/log hooks and hydrate the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger was already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
