//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app is a single page; `home` owns screen-level composition and
//! delegates rendering details to `components`.

pub mod home;
