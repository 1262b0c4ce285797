//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages, the header, and route guards read the session through a Leptos
//! context signal (see [`provide_session`]). Durable storage mirrors the
//! in-memory user so a page reload restores the session.
//!
//! STORAGE LAYOUT
//! ==============
//! - `user`: JSON-encoded [`User`]
//! - `token`: raw session token, duplicated from `User::token` for readers
//!   that only need the bearer value
//!
//! Both keys are always written together from the same `User`, so they
//! cannot drift through this module.
//!
//! HYDRATION
//! =========
//! The server render never sees `localStorage`, so the browser session
//! starts empty on both sides and [`provide_session`] restores it from an
//! effect after hydration. Until then [`SessionStore::is_restored`] is
//! false and route guards hold off.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::storage::{BrowserStorage, KeyValueStore, save_json};

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";

/// Failure reading a persisted session back.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("stored user record is not valid: {0}")]
    CorruptUser(#[from] serde_json::Error),
}

/// Decode a stored `user` entry.
///
/// # Errors
///
/// Returns [`SessionError::CorruptUser`] if `raw` is not a JSON user record.
pub fn parse_user(raw: &str) -> Result<User, SessionError> {
    Ok(serde_json::from_str(raw)?)
}

/// Holds at most one authenticated [`User`] and mirrors it into `storage`.
///
/// The in-memory user is the source of truth; storage is rewritten or
/// cleared in the same call as every mutation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStore<S> {
    storage: S,
    user: Option<User>,
    restored: bool,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Empty store over `storage`. Does not read persisted state.
    pub fn new(storage: S) -> Self {
        Self { storage, user: None, restored: false }
    }

    /// Store over `storage` with any persisted session restored.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.restore();
        store
    }

    /// Load the persisted session into memory.
    ///
    /// Requires both keys to be present and non-empty. A `user` entry that
    /// fails to parse is deleted together with `token`, leaving the store
    /// unauthenticated.
    pub fn restore(&mut self) {
        self.restored = true;
        self.user = None;
        let stored_user = self.storage.get(USER_KEY).filter(|v| !v.is_empty());
        let stored_token = self.storage.get(TOKEN_KEY).filter(|v| !v.is_empty());
        let (Some(raw), Some(_)) = (stored_user, stored_token) else {
            return;
        };

        match parse_user(&raw) {
            Ok(user) => {
                log::debug!("restored session for {}", user.email);
                self.user = Some(user);
            }
            Err(e) => {
                log::warn!("discarding persisted session: {e}");
                self.clear_storage();
            }
        }
    }

    /// Become authenticated as `user` and persist it.
    ///
    /// The record is trusted as given; no field validation happens here.
    pub fn login(&mut self, user: User) {
        self.user = Some(user);
        self.persist();
    }

    /// Drop the current user and delete both persisted entries.
    pub fn logout(&mut self) {
        self.user = None;
        self.clear_storage();
    }

    /// Replace the display name and phone of the signed-in user.
    ///
    /// Returns `false` and changes nothing when no user is signed in.
    pub fn update_profile(&mut self, name: &str, phone: Option<String>) -> bool {
        let Some(user) = self.user.as_mut() else {
            return false;
        };
        name.clone_into(&mut user.name);
        user.phone = phone;
        self.persist();
        true
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether [`Self::restore`] has run, i.e. persisted state has been
    /// consulted at least once.
    pub fn is_restored(&self) -> bool {
        self.restored
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.token.as_str())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store, handing back its storage (e.g. to reopen it).
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let Some(user) = self.user.as_ref() else {
            return;
        };
        if let Err(e) = save_json(&mut self.storage, USER_KEY, user) {
            log::warn!("failed to persist session user: {e}");
        }
        if let Err(e) = self.storage.set(TOKEN_KEY, &user.token) {
            log::warn!("failed to persist session token: {e}");
        }
    }

    fn clear_storage(&mut self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("failed to clear {key}: {e}");
            }
        }
    }
}

/// Session store backed by browser `localStorage`.
pub type BrowserSession = SessionStore<BrowserStorage>;

/// Context handle shared by every session consumer.
pub type SessionContext = RwSignal<BrowserSession>;

/// Provide an empty browser session as context and restore it on the
/// client once hydration has run.
pub fn provide_session() -> SessionContext {
    let session = RwSignal::new(BrowserSession::new(BrowserStorage));
    provide_context(session);
    Effect::new(move || {
        session.update(|s| {
            if !s.is_restored() {
                s.restore();
            }
        });
    });
    session
}

/// Session context provided by [`provide_session`].
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
