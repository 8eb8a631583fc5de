//! Component wrapper around the auth listener state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps organization-scoped content. Requires `SessionStore` (from the scope
//! root) and `AuthChannel` (from `App`) in context.

#[cfg(test)]
#[path = "auth_change_listener_test.rs"]
mod auth_change_listener_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::auth_events::AuthChannel;
use crate::state::session::SessionStore;
use crate::util::auth::{AuthListener, SignOutPolicy};
use crate::util::navigation::{BrowserNavigator, Navigator, RenderTarget};

/// Mount an `AuthListener` against the context stores and tie its lifetime to
/// the current reactive owner.
pub(crate) fn install_auth_listener(target: RenderTarget, policy: SignOutPolicy, navigator: Arc<dyn Navigator>) {
    let session = expect_context::<SessionStore>();
    let channel = expect_context::<AuthChannel>();

    let listener = AuthListener::mount(target, &channel, policy, session, navigator);
    if listener.is_armed() {
        log::debug!("auth listener armed");
    }
    on_cleanup(move || listener.unmount());
}

/// Reacts to live sign-out: hard-redirects to `when_signed_out` when set,
/// otherwise clears the session in place.
#[component]
pub fn AuthChangeListener(
    #[prop(optional, into)] when_signed_out: Option<String>,
    children: Children,
) -> impl IntoView {
    install_auth_listener(RenderTarget::current(), SignOutPolicy::from(when_signed_out), Arc::new(BrowserNavigator));
    children()
}
