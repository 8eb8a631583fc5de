//! Fake collaborators shared by resolver and loader tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::cookies::RequestContext;
use crate::error::IdentityError;
use crate::language::Languages;
use crate::loader::{AppDataLoader, OrganizationLookup};
use crate::model::{AuthUser, Membership, MembershipRole, Organization, UserData};
use crate::resolver::{IdentityProvider, ProfileLookup, SessionResolver};

/// Identity provider returning a fixed outcome.
pub enum FakeIdentity {
    User(AuthUser),
    Anonymous,
    Failing,
}

#[async_trait::async_trait]
impl IdentityProvider for FakeIdentity {
    async fn current_user(&self, _ctx: &RequestContext) -> Result<Option<AuthUser>, IdentityError> {
        match self {
            Self::User(user) => Ok(Some(user.clone())),
            Self::Anonymous => Ok(None),
            Self::Failing => Err(IdentityError::Provider("connection refused".into())),
        }
    }
}

/// Profile lookup returning a fixed outcome and counting calls.
pub struct FakeProfiles {
    pub outcome: Result<Option<UserData>, ()>,
    pub calls: AtomicUsize,
}

impl FakeProfiles {
    pub fn found(data: UserData) -> Self {
        Self { outcome: Ok(Some(data)), calls: AtomicUsize::new(0) }
    }

    pub fn missing() -> Self {
        Self { outcome: Ok(None), calls: AtomicUsize::new(0) }
    }

    pub fn failing() -> Self {
        Self { outcome: Err(()), calls: AtomicUsize::new(0) }
    }
}

#[async_trait::async_trait]
impl ProfileLookup for FakeProfiles {
    async fn user_data_by_id(&self, _user_id: &str) -> Result<Option<UserData>, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome
            .clone()
            .map_err(|()| IdentityError::Lookup("profiles table unavailable".into()))
    }
}

/// Organization lookup keyed by `(user_id, uuid)`.
pub struct FakeOrganizations {
    pub memberships: Vec<(String, Membership)>,
    pub failing: bool,
}

impl FakeOrganizations {
    pub fn none() -> Self {
        Self { memberships: Vec::new(), failing: false }
    }

    pub fn failing() -> Self {
        Self { memberships: Vec::new(), failing: true }
    }

    pub fn with(user_id: &str, uuid: &str, role: Option<MembershipRole>) -> Self {
        let membership = Membership { organization: organization(uuid), role };
        Self { memberships: vec![(user_id.to_owned(), membership)], failing: false }
    }
}

#[async_trait::async_trait]
impl OrganizationLookup for FakeOrganizations {
    async fn membership(&self, user_id: &str, organization_uuid: &str) -> Result<Option<Membership>, IdentityError> {
        if self.failing {
            return Err(IdentityError::Lookup("organizations table unavailable".into()));
        }
        Ok(self
            .memberships
            .iter()
            .find(|(uid, m)| uid == user_id && m.organization.uuid == organization_uuid)
            .map(|(_, m)| m.clone()))
    }
}

pub fn organization(uuid: &str) -> Organization {
    Organization { uuid: uuid.to_owned(), name: format!("Org {uuid}"), logo_url: None }
}

pub fn ana() -> UserData {
    UserData { id: "u1".into(), display_name: Some("Ana".into()), photo_url: None, onboarded: true }
}

pub fn resolver(identity: FakeIdentity, profiles: FakeProfiles) -> SessionResolver {
    SessionResolver::new(Arc::new(identity), Arc::new(profiles), Languages::new("en", &["en", "es"]))
}

pub fn loader(identity: FakeIdentity, profiles: FakeProfiles, organizations: FakeOrganizations) -> AppDataLoader {
    AppDataLoader::new(resolver(identity, profiles), Arc::new(organizations))
}
