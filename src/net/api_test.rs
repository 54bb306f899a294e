use super::*;

#[test]
fn error_message_prefers_backend_message_field() {
    let body = r#"{"message":"email already in use"}"#;
    assert_eq!(error_message_from_body(409, body), "email already in use");
}

#[test]
fn error_message_falls_back_to_status_for_malformed_body() {
    assert_eq!(error_message_from_body(500, "<html>oops</html>"), "request failed: 500");
    assert_eq!(error_message_from_body(502, ""), "request failed: 502");
}

#[test]
fn credentials_payload_carries_both_fields() {
    let payload = credentials_payload("a@x.com", "hunter2");
    assert_eq!(payload["email"], "a@x.com");
    assert_eq!(payload["password"], "hunter2");
}

#[test]
fn native_auth_calls_report_browser_only() {
    let backend = crate::net::backend::Backend {
        api_base: "/api".to_owned(),
        ws_base: String::new(),
    };
    let result = block_on_ready(sign_in(&backend, "a@x.com", "pw"));
    assert_eq!(
        result,
        Err(crate::net::error::NetError::Auth("not available outside the browser".to_owned()))
    );
}

/// Minimal executor for futures that are ready immediately (the native
/// stubs never actually await anything).
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};

    struct NoopWake;
    impl Wake for NoopWake {
        fn wake(self: Arc<Self>) {}
    }

    let waker = Waker::from(Arc::new(NoopWake));
    let mut cx = Context::from_waker(&waker);
    let mut fut = pin!(fut);
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
