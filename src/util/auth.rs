//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components that require a signed-in user should apply identical
//! unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionContext, SessionStore};
use crate::util::storage::KeyValueStore;

/// Whether a page guarded by sign-in should leave for `/login`.
///
/// Never before the persisted session has been restored.
pub fn should_redirect_unauth<S: KeyValueStore>(session: &SessionStore<S>) -> bool {
    session.is_restored() && !session.is_authenticated()
}

/// Redirect to `/login` once the session is restored and no user is signed
/// in.
pub fn install_unauth_redirect<F>(session: SessionContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
