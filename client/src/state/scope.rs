//! Scope Composition Root.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once per organization-scoped page. Seeds the session, organization
//! and sidebar stores from the server's `AppData` snapshot and keeps them in
//! step with upstream changes for as long as the scope is mounted.
//!
//! DESIGN
//! ======
//! Organization changes from upstream always win. Session changes only win
//! when the new session is authenticated: a logged-out snapshot arriving late
//! must not clobber a session the client already knows about, and clearing on
//! sign-out is the auth listener's job.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use identity::{AppData, Organization, UserSession};
use leptos::prelude::*;

use super::organization::OrganizationStore;
use super::session::SessionStore;
use super::sidebar::SidebarState;
use crate::util::storage::SharedStorage;

#[derive(Clone)]
pub struct ScopeRoot {
    pub session: SessionStore,
    pub organization: OrganizationStore,
    pub sidebar: SidebarState,
}

impl ScopeRoot {
    /// Build the stores from a server snapshot. Seeding does not write to
    /// durable storage.
    pub fn new(data: &AppData, storage: SharedStorage) -> Self {
        let session = SessionStore::new(data.session.clone());
        let organization =
            OrganizationStore::new(data.organization.clone(), session, storage.clone());
        let sidebar = SidebarState::new(data.ui.sidebar_state, storage);
        Self { session, organization, sidebar }
    }

    /// Make the stores available to every descendant.
    pub fn provide(&self) {
        provide_context(self.session);
        provide_context(self.organization.clone());
        provide_context(self.sidebar.clone());
    }

    /// Apply an upstream organization change. Returns whether it changed.
    pub fn sync_organization(&self, next: Option<Organization>) -> bool {
        self.organization.replace(next)
    }

    /// Apply an upstream session change if it is authenticated.
    pub fn sync_session(&self, next: Option<UserSession>) -> bool {
        let authenticated = next.as_ref().is_some_and(UserSession::is_authenticated);
        if !authenticated {
            return false;
        }
        self.session.replace(next)
    }
}
