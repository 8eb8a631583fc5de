//! Session State Store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the `UserSession` the rest of the tree renders against. Seeded from
//! the server snapshot, re-asserted by the scope root on authenticated
//! upstream changes, and cleared by the auth listener on a live sign-out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use identity::UserSession;
use leptos::prelude::*;

/// Current session with read + wholesale replace.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore {
    session: RwSignal<Option<UserSession>>,
}

impl SessionStore {
    pub fn new(initial: Option<UserSession>) -> Self {
        Self { session: RwSignal::new(initial) }
    }

    /// Tracked read of the current session.
    pub fn current(&self) -> Option<UserSession> {
        self.session.get()
    }

    pub fn current_untracked(&self) -> Option<UserSession> {
        self.session.get_untracked()
    }

    /// Identity id of the current principal, read without tracking.
    pub fn user_id_untracked(&self) -> Option<String> {
        self.session
            .with_untracked(|session| session.as_ref().and_then(UserSession::user_id).map(str::to_owned))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session
            .with(|session| session.as_ref().is_some_and(UserSession::is_authenticated))
    }

    /// Replace the session. Equal values are a no-op and notify nobody.
    /// Returns whether the stored value changed.
    pub fn replace(&self, next: Option<UserSession>) -> bool {
        self.session
            .try_maybe_update(|current| {
                if *current == next {
                    (false, false)
                } else {
                    *current = next;
                    (true, true)
                }
            })
            .unwrap_or(false)
    }
}
