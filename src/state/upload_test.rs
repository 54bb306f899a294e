use super::*;

#[test]
fn default_is_idle() {
    let state = UploadState::default();
    assert!(!state.uploading);
    assert_eq!(state.percent, 0);
    assert!(state.error.is_none());
}

#[test]
fn begin_enters_uploading_and_clears_stale_error() {
    let mut state = UploadState {
        error: Some("old failure".to_owned()),
        ..UploadState::default()
    };
    assert!(state.begin());
    assert!(state.uploading);
    assert_eq!(state.percent, 0);
    assert!(state.error.is_none());
}

#[test]
fn begin_rejects_second_upload_while_one_is_in_flight() {
    let mut state = UploadState::default();
    assert!(state.begin());
    state.apply_progress(40);

    assert!(!state.begin());
    // The in-flight transfer is untouched; only the rejection is recorded.
    assert!(state.uploading);
    assert_eq!(state.percent, 40);
    assert_eq!(state.error.as_deref(), Some("an upload is already in progress"));
}

#[test]
fn progress_is_monotonically_non_decreasing() {
    let mut state = UploadState::default();
    assert!(state.begin());
    state.apply_progress(10);
    state.apply_progress(55);
    state.apply_progress(30); // late out-of-order report
    assert_eq!(state.percent, 55);
    state.apply_progress(100);
    assert_eq!(state.percent, 100);
}

#[test]
fn progress_is_clamped_to_one_hundred() {
    let mut state = UploadState::default();
    assert!(state.begin());
    state.apply_progress(250);
    assert_eq!(state.percent, 100);
}

#[test]
fn failure_resets_progress_and_returns_to_idle() {
    let mut state = UploadState::default();
    assert!(state.begin());
    state.apply_progress(80);
    state.fail("storage quota exceeded".to_owned());
    assert!(!state.uploading);
    assert_eq!(state.percent, 0);
    assert_eq!(state.error.as_deref(), Some("storage quota exceeded"));
}

#[test]
fn completion_returns_to_idle_with_progress_reset() {
    let mut state = UploadState::default();
    assert!(state.begin());
    state.apply_progress(100);
    state.complete();
    assert!(!state.uploading);
    assert_eq!(state.percent, 0);
    assert!(state.error.is_none());
}

#[test]
fn upload_can_be_retried_after_failure() {
    let mut state = UploadState::default();
    assert!(state.begin());
    state.fail("network error during upload".to_owned());
    assert!(state.begin());
    assert!(state.uploading);
    assert!(state.error.is_none());
}
