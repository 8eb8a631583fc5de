//! Live auth-change event stream.
//!
//! ARCHITECTURE
//! ============
//! `AuthEvents` is the identity-provider capability the auth listener
//! subscribes to. `AuthChannel` is the in-process implementation: sign-out in
//! this tab publishes directly, and sign-out in another tab arrives through a
//! `localStorage` broadcast that triggers a re-check of `/api/auth/me`.
//!
//! Subscriptions release themselves on drop, so a listener that forgets to
//! unsubscribe cannot outlive its component tree.

#[cfg(test)]
#[path = "auth_events_test.rs"]
mod auth_events_test;

use std::sync::{Arc, Mutex, PoisonError, Weak};

use identity::AuthUser;

/// `localStorage` key written on sign-out so other tabs notice.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const AUTH_BROADCAST_KEY: &str = "orgscope:auth";

/// Kind of change reported by the identity provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthChangeEvent {
    SignedOut,
    UserUpdated,
}

impl AuthChangeEvent {
    /// Event reported after re-checking the current user.
    #[must_use]
    pub fn for_user(user: Option<&AuthUser>) -> Self {
        if user.is_some() { Self::UserUpdated } else { Self::SignedOut }
    }
}

pub type AuthCallback = Arc<dyn Fn(AuthChangeEvent, Option<&AuthUser>) + Send + Sync>;

/// Handle to a live subscription. Released exactly once, on `unsubscribe` or drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Identity-provider event stream.
pub trait AuthEvents: Send + Sync {
    fn on_auth_state_change(&self, callback: AuthCallback) -> Subscription;
}

#[derive(Default)]
struct ChannelInner {
    next_id: u64,
    listeners: Vec<(u64, AuthCallback)>,
}

/// In-process fan-out of auth events to subscribers.
#[derive(Clone, Default)]
pub struct AuthChannel {
    inner: Arc<Mutex<ChannelInner>>,
}

impl AuthChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to every current subscriber.
    ///
    /// Subscribers are snapshotted before dispatch, so a callback may
    /// unsubscribe itself (or others) while the event is being delivered.
    pub fn publish(&self, event: AuthChangeEvent, user: Option<AuthUser>) {
        let listeners: Vec<AuthCallback> = lock(&self.inner)
            .listeners
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        log::debug!("auth event {event:?} to {} subscriber(s)", listeners.len());
        for callback in listeners {
            callback(event, user.as_ref());
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }
}

impl AuthEvents for AuthChannel {
    fn on_auth_state_change(&self, callback: AuthCallback) -> Subscription {
        let id = {
            let mut inner = lock(&self.inner);
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, callback));
            id
        };
        let weak: Weak<Mutex<ChannelInner>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                lock(&inner).listeners.retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }
}

fn lock(inner: &Mutex<ChannelInner>) -> std::sync::MutexGuard<'_, ChannelInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Tell other tabs that this tab signed out.
pub fn broadcast_sign_out() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let stamp = js_sys::Date::now().to_string();
        if storage.set_item(AUTH_BROADCAST_KEY, &stamp).is_err() {
            log::warn!("failed to broadcast sign-out to other tabs");
        }
    }
}

/// Whether a `storage` event key is the sign-out broadcast.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn is_auth_broadcast(key: Option<&str>) -> bool {
    key == Some(AUTH_BROADCAST_KEY)
}

/// Re-check the current user whenever another tab broadcasts a sign-out, and
/// publish the answer on `channel`.
#[cfg(feature = "hydrate")]
pub fn install_storage_bridge(channel: AuthChannel) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let handler = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
        if !is_auth_broadcast(ev.key().as_deref()) {
            return;
        }
        let channel = channel.clone();
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            channel.publish(AuthChangeEvent::for_user(user.as_ref()), user);
        });
    });
    if window
        .add_event_listener_with_callback("storage", handler.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to install auth storage bridge");
        return;
    }
    // Lives for the page lifetime; the channel is app-wide.
    handler.forget();
}
