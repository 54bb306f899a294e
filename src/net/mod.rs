//! Networking modules for the backend HTTP + WebSocket API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` holds connection configuration and endpoint construction,
//! `api` handles REST calls, `feed` manages the two live WebSocket
//! subscriptions (auth events and the gallery query), `upload` drives the
//! blob-store upload pipeline, and `types` defines the shared wire schema.

pub mod api;
pub mod backend;
pub mod error;
pub mod feed;
pub mod types;
pub mod upload;
