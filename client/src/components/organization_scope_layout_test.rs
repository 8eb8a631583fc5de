use std::sync::Arc;

use any_spawner::Executor;
use identity::{AuthUser, Language, Organization, SidebarPreference, UiPreferences, UserSession};
use tokio::task::LocalSet;

use super::*;
use crate::state::session::SessionStore;
use crate::util::storage::{DurableStorage, MemoryStorage};

fn org(uuid: &str) -> Organization {
    Organization { uuid: uuid.to_owned(), name: format!("Org {uuid}"), logo_url: None }
}

fn signed_in(id: &str) -> UserSession {
    UserSession { auth: Some(AuthUser::new(id)), data: None, role: None }
}

fn data(session: Option<UserSession>, organization: Option<Organization>) -> AppData {
    AppData {
        session,
        organization,
        language: Language::new("en"),
        ui: UiPreferences { sidebar_state: SidebarPreference::Expanded },
    }
}

async fn settle() {
    for _ in 0..4 {
        Executor::tick().await;
    }
}

#[test]
fn content_class_tracks_collapsed_flag() {
    assert_eq!(content_class(false), "scope-shell");
    assert_eq!(content_class(true), "scope-shell scope-shell--collapsed");
}

// =============================================================
// upstream sync
// =============================================================

#[tokio::test]
async fn mount_persists_active_organization() {
    _ = Executor::init_tokio();
    LocalSet::new()
        .run_until(async {
            let owner = Owner::new();
            let storage = Arc::new(MemoryStorage::default());
            let upstream = RwSignal::new(data(Some(signed_in("u1")), Some(org("org-1"))));

            let scope = owner.with(|| mount_scope(upstream.into(), storage.clone()));
            settle().await;

            assert_eq!(scope.organization.current_untracked(), Some(org("org-1")));
            assert_eq!(storage.get_value("u1-organizationId").as_deref(), Some("org-1"));
            let provided = owner.with(use_context::<SessionStore>).and_then(|s| s.user_id_untracked());
            assert_eq!(provided.as_deref(), Some("u1"));
        })
        .await;
}

#[tokio::test]
async fn logged_out_upstream_keeps_session() {
    _ = Executor::init_tokio();
    LocalSet::new()
        .run_until(async {
            let owner = Owner::new();
            let storage = Arc::new(MemoryStorage::default());
            let upstream = RwSignal::new(data(Some(signed_in("u1")), Some(org("org-1"))));
            let scope = owner.with(|| mount_scope(upstream.into(), storage.clone()));
            settle().await;

            upstream.update(|d| d.session = Some(UserSession { auth: None, data: None, role: None }));
            settle().await;
            assert_eq!(scope.session.current_untracked(), Some(signed_in("u1")));

            upstream.update(|d| d.session = None);
            settle().await;
            assert_eq!(scope.session.current_untracked(), Some(signed_in("u1")));
        })
        .await;
}

#[tokio::test]
async fn changed_organization_is_applied_and_persisted() {
    _ = Executor::init_tokio();
    LocalSet::new()
        .run_until(async {
            let owner = Owner::new();
            let storage = Arc::new(MemoryStorage::default());
            let upstream = RwSignal::new(data(Some(signed_in("u1")), Some(org("org-1"))));
            let scope = owner.with(|| mount_scope(upstream.into(), storage.clone()));
            settle().await;

            upstream.update(|d| d.organization = Some(org("org-2")));
            settle().await;

            assert_eq!(scope.organization.current_untracked(), Some(org("org-2")));
            assert_eq!(storage.get_value("u1-organizationId").as_deref(), Some("org-2"));
        })
        .await;
}

#[tokio::test]
async fn authenticated_upstream_replaces_session() {
    _ = Executor::init_tokio();
    LocalSet::new()
        .run_until(async {
            let owner = Owner::new();
            let upstream = RwSignal::new(data(Some(signed_in("u1")), None));
            let scope = owner.with(|| mount_scope(upstream.into(), Arc::new(MemoryStorage::default())));
            settle().await;

            upstream.update(|d| d.session = Some(signed_in("u2")));
            settle().await;

            assert_eq!(scope.session.current_untracked(), Some(signed_in("u2")));
        })
        .await;
}
