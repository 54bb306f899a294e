//! Error taxonomy for backend interactions.
//!
//! DESIGN
//! ======
//! Three surfaces, three variants: auth failures render near the login form,
//! upload failures render near the upload control, and snapshot failures are
//! logged only (the gallery keeps showing the last good snapshot). The
//! payload is always the human-readable message the backend sent, so what
//! the user sees is what the server said.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error raised by a backend call, carrying the backend-provided message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NetError {
    /// Identity-service failure (signup, login, logout).
    #[error("{0}")]
    Auth(String),
    /// Blob-store or metadata-record failure during an upload.
    #[error("{0}")]
    Upload(String),
    /// Live-subscription failure; never shown to the user.
    #[error("{0}")]
    Snapshot(String),
}

impl NetError {
    /// The message to display in the UI.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Auth(msg) | Self::Upload(msg) | Self::Snapshot(msg) => msg,
        }
    }
}
