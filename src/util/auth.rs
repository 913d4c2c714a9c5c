//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated route applies identical unauthenticated redirect
//! behavior once the bootstrap profile fetch has settled.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Whether a route should bounce to the login screen.
pub fn should_redirect_unauth(session: &SessionState) -> bool {
    !session.loading && session.user.is_none()
}

/// Redirect to `/home` whenever the session has loaded and no user is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/home", NavigateOptions::default());
        }
    });
}
