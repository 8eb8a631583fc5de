use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use identity::AuthUser;
use leptos::prelude::Owner;

use super::*;
use crate::net::auth_events::AuthEvents;

#[test]
fn complete_sign_out_publishes_signed_out_without_user() {
    let channel = AuthChannel::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = channel.on_auth_state_change(Arc::new(move |event: AuthChangeEvent, user: Option<&AuthUser>| {
        sink.lock().unwrap().push((event, user.cloned()));
    }));

    complete_sign_out(&channel);

    assert_eq!(*seen.lock().unwrap(), vec![(AuthChangeEvent::SignedOut, None)]);
}

#[test]
fn use_sign_out_publishes_on_context_channel() {
    let owner = Owner::new();
    owner.with(|| {
        let channel = AuthChannel::new();
        provide_context(channel.clone());
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let _sub = channel.on_auth_state_change(Arc::new(move |_: AuthChangeEvent, _: Option<&AuthUser>| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        let sign_out = use_sign_out();
        sign_out();

        assert_eq!(count.load(Ordering::SeqCst), 1);
    });
}
