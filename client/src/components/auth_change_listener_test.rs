use std::sync::Mutex;

use identity::{AuthUser, UserSession};

use super::*;
use crate::net::auth_events::AuthChangeEvent;

#[derive(Default)]
struct RecordingNavigator {
    navigations: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        "/dashboard/org-1".to_owned()
    }

    fn navigate_hard_to(&self, path: &str) {
        self.navigations.lock().unwrap().push(path.to_owned());
    }
}

fn signed_in() -> SessionStore {
    SessionStore::new(Some(UserSession { auth: Some(AuthUser::new("u1")), data: None, role: None }))
}

// =============================================================
// owner lifetime
// =============================================================

#[test]
fn listener_lives_until_owner_cleanup() {
    let owner = Owner::new();
    owner.with(|| {
        let channel = AuthChannel::new();
        provide_context(signed_in());
        provide_context(channel.clone());
        let navigator = Arc::new(RecordingNavigator::default());

        let scope = Owner::new();
        scope.with(|| install_auth_listener(RenderTarget::Browser, SignOutPolicy::redirect_to("/"), navigator.clone()));
        assert_eq!(channel.subscriber_count(), 1);

        scope.cleanup();
        assert_eq!(channel.subscriber_count(), 0);

        channel.publish(AuthChangeEvent::SignedOut, None);
        assert!(navigator.navigations().is_empty());
    });
}

#[test]
fn mounted_listener_clears_session_on_sign_out() {
    let owner = Owner::new();
    owner.with(|| {
        let channel = AuthChannel::new();
        let session = signed_in();
        provide_context(session);
        provide_context(channel.clone());

        let scope = Owner::new();
        scope.with(|| {
            install_auth_listener(
                RenderTarget::Browser,
                SignOutPolicy::clear_in_place(),
                Arc::new(RecordingNavigator::default()),
            );
        });

        channel.publish(AuthChangeEvent::SignedOut, None);
        assert_eq!(session.current_untracked(), None);
        scope.cleanup();
    });
}

#[test]
fn server_render_never_subscribes() {
    let owner = Owner::new();
    owner.with(|| {
        let channel = AuthChannel::new();
        provide_context(signed_in());
        provide_context(channel.clone());

        let navigator = Arc::new(RecordingNavigator::default());
        install_auth_listener(RenderTarget::Server, SignOutPolicy::redirect_to("/"), navigator);
        assert_eq!(channel.subscriber_count(), 0);
    });
}
