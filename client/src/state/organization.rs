//! Organization State Store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the active organization for the mounted scope and mirrors its id
//! into durable storage under `{userId}-organizationId`, so the next server
//! render can restore the selection before any route names an organization.

#[cfg(test)]
#[path = "organization_test.rs"]
mod organization_test;

use identity::Organization;
use identity::cookies::organization_cookie_name;
use leptos::prelude::*;

use super::session::SessionStore;
use crate::util::storage::SharedStorage;

/// Active organization with read + replace and a durable-storage side effect.
#[derive(Clone)]
pub struct OrganizationStore {
    organization: RwSignal<Option<Organization>>,
    session: SessionStore,
    storage: SharedStorage,
}

impl OrganizationStore {
    /// The durable key follows whichever user `session` holds at replace time.
    pub fn new(initial: Option<Organization>, session: SessionStore, storage: SharedStorage) -> Self {
        Self { organization: RwSignal::new(initial), session, storage }
    }

    pub fn current(&self) -> Option<Organization> {
        self.organization.get()
    }

    pub fn current_untracked(&self) -> Option<Organization> {
        self.organization.get_untracked()
    }

    /// Replace the active organization and persist its id for the current user.
    ///
    /// No write happens when the organization has no id or no user is known;
    /// the previously persisted value stays in place. Returns whether the
    /// stored value changed.
    pub fn replace(&self, next: Option<Organization>) -> bool {
        self.persist_selection(next.as_ref());
        self.organization
            .try_maybe_update(|current| {
                if *current == next {
                    (false, false)
                } else {
                    *current = next;
                    (true, true)
                }
            })
            .unwrap_or(false)
    }

    fn persist_selection(&self, organization: Option<&Organization>) {
        let Some(organization_id) = organization.and_then(Organization::identifier) else {
            return;
        };
        let Some(user_id) = self.session.user_id_untracked() else {
            return;
        };
        self.storage
            .set_value(&organization_cookie_name(&user_id), organization_id);
    }
}

impl std::fmt::Debug for OrganizationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrganizationStore")
            .field("organization", &self.organization)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
