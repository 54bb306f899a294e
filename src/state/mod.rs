//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `gallery`, `upload`) so individual
//! components can depend on small focused models. Each struct is plain data
//! with synchronous transition methods; Leptos signals wrap whole structs
//! via context, keeping the transitions natively testable.

pub mod gallery;
pub mod session;
pub mod upload;
