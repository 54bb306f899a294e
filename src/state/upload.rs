//! Upload state machine: idle -> uploading(0..=100) -> idle.
//!
//! DESIGN
//! ======
//! Single-flight: `begin` rejects a new attempt while one transfer is
//! outstanding, leaving the in-flight upload alone. Progress is clamped so
//! the displayed percent never decreases within one upload. Every terminal
//! transition (success or failure) resets progress to zero.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Transient state for the single allowed in-flight upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    /// True from acceptance until the terminal transition.
    pub uploading: bool,
    /// Integer percent complete, monotonically non-decreasing per upload.
    pub percent: u32,
    /// Last upload failure message, shown near the upload control.
    pub error: Option<String>,
}

impl UploadState {
    /// Try to start an upload. Returns `false` (recording a rejection
    /// message) when one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.uploading {
            self.error = Some("an upload is already in progress".to_owned());
            return false;
        }
        self.uploading = true;
        self.percent = 0;
        self.error = None;
        true
    }

    /// Apply a progress report, clamped to 100 and never decreasing.
    pub fn apply_progress(&mut self, percent: u32) {
        self.percent = self.percent.max(percent.min(100));
    }

    /// Terminal failure: surface the backend message, return to idle.
    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.uploading = false;
        self.percent = 0;
    }

    /// Terminal success: return to idle.
    pub fn complete(&mut self) {
        self.uploading = false;
        self.percent = 0;
    }
}
