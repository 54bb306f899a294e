//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page's panels while reading/writing shared state
//! from Leptos context providers. Backend calls run as spawned local tasks
//! so handlers return immediately.

pub mod auth_panel;
pub mod gallery_panel;
pub mod header_bar;
pub mod photo_card;
pub mod upload_panel;
