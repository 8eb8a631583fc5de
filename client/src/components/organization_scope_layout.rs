//! Organization scope layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounts the scope composition root for one `AppData` snapshot, keeps the
//! stores in step with later snapshots, and renders the sidebar shell inside
//! an auth listener that sends signed-out users to `/`.

#[cfg(test)]
#[path = "organization_scope_layout_test.rs"]
mod organization_scope_layout_test;

use identity::AppData;
use leptos::prelude::*;

use crate::components::app_sidebar::AppSidebar;
use crate::components::auth_change_listener::AuthChangeListener;
use crate::state::scope::ScopeRoot;
use crate::util::storage::{SharedStorage, browser_storage};

fn content_class(collapsed: bool) -> &'static str {
    if collapsed { "scope-shell scope-shell--collapsed" } else { "scope-shell" }
}

/// Seed and provide the scope stores from `data`, then follow it: every
/// upstream organization is applied, upstream sessions only when
/// authenticated.
pub(crate) fn mount_scope(data: Signal<AppData>, storage: SharedStorage) -> ScopeRoot {
    let scope = ScopeRoot::new(&data.get_untracked(), storage);
    scope.provide();

    let upstream_organization = Memo::new(move |_| data.with(|d| d.organization.clone()));
    let upstream_session = Memo::new(move |_| data.with(|d| d.session.clone()));

    let sync = scope.clone();
    Effect::new(move || {
        sync.sync_organization(upstream_organization.get());
    });
    let sync = scope.clone();
    Effect::new(move || {
        sync.sync_session(upstream_session.get());
    });

    scope
}

#[component]
pub fn OrganizationScopeLayout(#[prop(into)] data: Signal<AppData>, children: Children) -> impl IntoView {
    let scope = mount_scope(data, browser_storage());
    let language = Memo::new(move |_| data.with(|d| d.language.to_string()));

    let collapsed = scope.sidebar.collapsed_signal();

    view! {
        <AuthChangeListener when_signed_out="/">
            <div class=move || content_class(collapsed.get()) lang=move || language.get()>
                <AppSidebar/>
                <main class="scope-shell__content">{children()}</main>
            </div>
        </AuthChangeListener>
    }
}
