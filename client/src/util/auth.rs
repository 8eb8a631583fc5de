//! Auth Change Listener state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Organization-scoped routes wrap their content in `AuthChangeListener`. The
//! listener watches the identity provider's live event stream and reacts when
//! the user disappears: either a hard redirect to a configured target or an
//! in-place clear of the session store.
//!
//! DESIGN
//! ======
//! The listener is `Detached` during server rendering and `Armed` once it has
//! subscribed in the browser. Which state to enter is decided synchronously at
//! mount, before any subscription exists. The reaction to an event is a pure
//! function (`decide`) so it can be tested without an event stream.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fallible. A disposed session signal makes the clear a
//! no-op; the navigator logs its own failures.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use identity::AuthUser;

use super::navigation::{Navigator, RenderTarget};
use crate::net::auth_events::{AuthCallback, AuthChangeEvent, AuthEvents, Subscription};
use crate::state::session::SessionStore;

/// What to do when the live stream reports no user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignOutPolicy {
    redirect_to: Option<String>,
}

impl SignOutPolicy {
    #[must_use]
    pub fn redirect_to(path: impl Into<String>) -> Self {
        Self { redirect_to: Some(path.into()) }
    }

    #[must_use]
    pub fn clear_in_place() -> Self {
        Self { redirect_to: None }
    }

    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.redirect_to.as_deref()
    }
}

impl From<Option<String>> for SignOutPolicy {
    fn from(redirect_to: Option<String>) -> Self {
        Self { redirect_to }
    }
}

/// Reaction to a single auth event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListenerAction {
    Ignore,
    Redirect(String),
    ClearSession,
}

/// Decide the reaction to an event carrying `user` while at `current_path`.
#[must_use]
pub fn decide(policy: &SignOutPolicy, user: Option<&AuthUser>, current_path: &str) -> ListenerAction {
    if user.is_some() {
        return ListenerAction::Ignore;
    }
    match policy.target() {
        Some(target) if target == current_path => ListenerAction::Ignore,
        Some(target) => ListenerAction::Redirect(target.to_owned()),
        None => ListenerAction::ClearSession,
    }
}

struct ArmedInner {
    slot: Mutex<Option<Subscription>>,
    released: AtomicBool,
}

impl ArmedInner {
    /// Release the subscription. Safe to call any number of times; the
    /// subscription itself is released at most once.
    fn release(&self) {
        self.released.store(true, Ordering::SeqCst);
        let taken = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(subscription) = taken {
            subscription.unsubscribe();
        }
    }

    fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }
}

enum ListenerState {
    Detached,
    Armed(Arc<ArmedInner>),
}

/// A mounted auth listener. Releases its subscription on `unmount` or drop.
pub struct AuthListener {
    state: ListenerState,
}

impl AuthListener {
    /// Mount the listener for `target`.
    ///
    /// On the server this returns a `Detached` listener without touching
    /// `events`. In the browser it subscribes exactly once.
    pub fn mount(
        target: RenderTarget,
        events: &dyn AuthEvents,
        policy: SignOutPolicy,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        if !target.is_browser() {
            return Self { state: ListenerState::Detached };
        }

        let inner = Arc::new(ArmedInner { slot: Mutex::new(None), released: AtomicBool::new(false) });
        let weak: Weak<ArmedInner> = Arc::downgrade(&inner);
        let callback: AuthCallback = Arc::new(move |event: AuthChangeEvent, user: Option<&AuthUser>| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if inner.is_released() {
                return;
            }
            match decide(&policy, user, &navigator.current_path()) {
                ListenerAction::Ignore => {}
                ListenerAction::Redirect(path) => {
                    log::info!("auth event {event:?} without user; redirecting to {path}");
                    navigator.navigate_hard_to(&path);
                    inner.release();
                }
                ListenerAction::ClearSession => {
                    log::info!("auth event {event:?} without user; clearing session");
                    session.replace(None);
                }
            }
        });

        let subscription = events.on_auth_state_change(callback);
        if inner.is_released() {
            // A redirect fired while subscribing.
            subscription.unsubscribe();
        } else {
            *inner.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(subscription);
        }
        Self { state: ListenerState::Armed(inner) }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        matches!(self.state, ListenerState::Armed(_))
    }

    pub fn unmount(self) {
        drop(self);
    }
}

impl Drop for AuthListener {
    fn drop(&mut self) {
        if let ListenerState::Armed(inner) = &self.state {
            inner.release();
        }
    }
}

impl std::fmt::Debug for AuthListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            ListenerState::Detached => "Detached",
            ListenerState::Armed(_) => "Armed",
        };
        f.debug_struct("AuthListener").field("state", &state).finish()
    }
}
