//! Sign-out action and button.

#[cfg(test)]
#[path = "sign_out_button_test.rs"]
mod sign_out_button_test;

use leptos::prelude::*;

use crate::net::auth_events::{AuthChangeEvent, AuthChannel, broadcast_sign_out};

/// Tell other tabs and local listeners that the user signed out.
pub fn complete_sign_out(channel: &AuthChannel) {
    broadcast_sign_out();
    channel.publish(AuthChangeEvent::SignedOut, None);
}

/// Callback that ends the server session, then notifies listeners.
pub fn use_sign_out() -> impl Fn() + Clone + Send + Sync + 'static {
    let channel = expect_context::<AuthChannel>();
    move || {
        let channel = channel.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            complete_sign_out(&channel);
        });
        #[cfg(not(feature = "hydrate"))]
        complete_sign_out(&channel);
    }
}

#[component]
pub fn SignOutButton() -> impl IntoView {
    let sign_out = use_sign_out();
    view! {
        <button class="btn app-sidebar__sign-out" on:click=move |_| sign_out()>
            "Sign out"
        </button>
    }
}
