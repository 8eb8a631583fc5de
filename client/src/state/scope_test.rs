use std::sync::Arc;

use identity::{AuthUser, Language, SidebarPreference, UiPreferences, UserData};
use leptos::prelude::Owner;

use super::*;
use crate::util::storage::{DurableStorage, MemoryStorage};

fn org(uuid: &str) -> Organization {
    Organization { uuid: uuid.to_owned(), name: format!("Org {uuid}"), logo_url: None }
}

fn session(id: &str, name: &str) -> UserSession {
    UserSession {
        auth: Some(AuthUser::new(id)),
        data: Some(UserData { id: id.to_owned(), display_name: Some(name.to_owned()), ..UserData::default() }),
        role: None,
    }
}

fn logged_out() -> UserSession {
    UserSession { auth: None, data: None, role: None }
}

fn data(session: Option<UserSession>, organization: Option<Organization>) -> AppData {
    AppData {
        session,
        organization,
        language: Language::new("en"),
        ui: UiPreferences { sidebar_state: SidebarPreference::Collapsed },
    }
}

// =============================================================
// seeding
// =============================================================

#[test]
fn new_seeds_stores_without_writing() {
    let storage = Arc::new(MemoryStorage::default());
    let scope = ScopeRoot::new(&data(Some(session("u1", "Ana")), Some(org("org-1"))), storage.clone());

    assert_eq!(scope.session.current_untracked(), Some(session("u1", "Ana")));
    assert_eq!(scope.organization.current_untracked(), Some(org("org-1")));
    assert!(scope.sidebar.collapsed_signal().get_untracked());
    assert_eq!(storage.writes(), 0);
}

#[test]
fn new_keeps_logged_out_snapshot_as_is() {
    let scope = ScopeRoot::new(&data(Some(logged_out()), None), Arc::new(MemoryStorage::default()));
    assert_eq!(scope.session.current_untracked(), Some(logged_out()));
    assert!(scope.organization.current_untracked().is_none());
}

#[test]
fn provide_exposes_stores_as_context() {
    let owner = Owner::new();
    owner.with(|| {
        let scope = ScopeRoot::new(&data(Some(session("u1", "Ana")), None), Arc::new(MemoryStorage::default()));
        scope.provide();
        let provided = expect_context::<SessionStore>();
        assert_eq!(provided.current_untracked(), Some(session("u1", "Ana")));
        assert!(use_context::<OrganizationStore>().is_some());
        assert!(use_context::<SidebarState>().is_some());
    });
}

// =============================================================
// upstream sync
// =============================================================

#[test]
fn sync_organization_always_replaces_and_persists() {
    let storage = Arc::new(MemoryStorage::default());
    let scope = ScopeRoot::new(&data(Some(session("u1", "Ana")), None), storage.clone());

    assert!(scope.sync_organization(Some(org("org-2"))));
    assert_eq!(storage.get_value("u1-organizationId").as_deref(), Some("org-2"));

    assert!(scope.sync_organization(None));
    assert!(scope.organization.current_untracked().is_none());
}

#[test]
fn sync_session_ignores_unauthenticated_values() {
    let scope = ScopeRoot::new(&data(Some(session("u1", "Ana")), None), Arc::new(MemoryStorage::default()));

    assert!(!scope.sync_session(None));
    assert!(!scope.sync_session(Some(logged_out())));
    assert_eq!(scope.session.current_untracked(), Some(session("u1", "Ana")));
}

#[test]
fn sync_session_replaces_with_authenticated_value() {
    let scope = ScopeRoot::new(&data(Some(logged_out()), None), Arc::new(MemoryStorage::default()));

    assert!(scope.sync_session(Some(session("u2", "Bo"))));
    assert_eq!(scope.session.user_id_untracked().as_deref(), Some("u2"));
    assert!(!scope.sync_session(Some(session("u2", "Bo"))));
}

#[test]
fn clearing_session_leaves_organization_untouched() {
    let storage = Arc::new(MemoryStorage::default());
    let scope = ScopeRoot::new(&data(Some(session("u1", "Ana")), None), storage.clone());
    scope.sync_organization(Some(org("org-1")));

    scope.session.replace(None);

    assert_eq!(scope.organization.current_untracked(), Some(org("org-1")));
    assert_eq!(storage.get_value("u1-organizationId").as_deref(), Some("org-1"));
}

#[test]
fn live_sign_out_without_target_clears_session_only() {
    use crate::net::auth_events::{AuthChangeEvent, AuthChannel};
    use crate::util::auth::{AuthListener, SignOutPolicy};
    use crate::util::navigation::{BrowserNavigator, RenderTarget};

    let storage = Arc::new(MemoryStorage::default());
    let scope = ScopeRoot::new(&data(Some(session("u1", "Ana")), None), storage.clone());
    scope.sync_organization(Some(org("org-1")));
    assert_eq!(storage.get_value("u1-organizationId").as_deref(), Some("org-1"));

    let channel = AuthChannel::new();
    let listener = AuthListener::mount(
        RenderTarget::Browser,
        &channel,
        SignOutPolicy::clear_in_place(),
        scope.session,
        Arc::new(BrowserNavigator),
    );
    channel.publish(AuthChangeEvent::SignedOut, None);

    assert!(scope.session.current_untracked().is_none());
    assert_eq!(scope.organization.current_untracked(), Some(org("org-1")));
    assert_eq!(storage.writes(), 1);
    listener.unmount();
    assert_eq!(channel.subscriber_count(), 0);
}
