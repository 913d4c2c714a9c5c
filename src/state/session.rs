//! Session state for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and identity-aware components read this to coordinate login
//! redirects and per-user rendering. The bootstrap profile fetch in `App`
//! resolves `loading` exactly once per page load.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SessionUser;

/// Session state tracking the signed-in user and the bootstrap fetch.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for SessionState {
    /// Starts loading until the bootstrap profile fetch resolves.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// Google id of the signed-in user, if any.
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.id.as_str())
    }
}
