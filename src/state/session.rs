//! Session state: current identity plus the auth form fields.
//!
//! SYSTEM CONTEXT
//! ==============
//! `user` and `loading` are owned by the auth-event stream; the form fields
//! and error line are owned by the auth actions. Neither side touches the
//! photo list.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Identity;

/// Auth state for the single page: stream-fed identity plus form fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// Current identity, or `None` when signed out.
    pub user: Option<Identity>,
    /// True until the first auth-stream event arrives.
    pub loading: bool,
    /// Email form field.
    pub email: String,
    /// Password form field.
    pub password: String,
    /// Last auth failure message from the backend, shown near the form.
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            email: String::new(),
            password: String::new(),
            error: None,
        }
    }
}

impl SessionState {
    /// Apply one auth-stream event: mirror the delivered identity (or
    /// absence) and clear the initial loading flag.
    pub fn apply_auth_event(&mut self, identity: Option<Identity>) {
        self.user = identity;
        self.loading = false;
    }

    /// A signup or login call succeeded: clear the form.
    pub fn auth_succeeded(&mut self) {
        self.email.clear();
        self.password.clear();
        self.error = None;
    }

    /// A signup or login call failed: surface the backend message and leave
    /// the form fields untouched.
    pub fn auth_failed(&mut self, message: String) {
        self.error = Some(message);
    }
}
