//! Postgres-backed implementations of the identity lookups.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AppDataLoader` is built from these three adapters at startup and handed to
//! Leptos through server-function context. Identifiers cross the boundary as
//! strings; a string that is not a uuid cannot match any row and is treated as
//! "not found" rather than an error.

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;

use async_trait::async_trait;
use identity::{
    AuthUser, IdentityError, IdentityProvider, Membership, OrganizationLookup, ProfileLookup, RequestContext, UserData,
};
use sqlx::PgPool;
use uuid::Uuid;

use super::{organization, profile, session};

fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Identity of the request's session cookie.
#[derive(Clone)]
pub struct PgIdentityProvider {
    pool: PgPool,
}

impl PgIdentityProvider {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityProvider for PgIdentityProvider {
    async fn current_user(&self, ctx: &RequestContext) -> Result<Option<AuthUser>, IdentityError> {
        let Some(token) = ctx.session_token() else {
            return Ok(None);
        };
        session::validate_session(&self.pool, token)
            .await
            .map_err(|e| IdentityError::Provider(e.to_string()))
    }
}

#[derive(Clone)]
pub struct PgProfileLookup {
    pool: PgPool,
}

impl PgProfileLookup {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileLookup for PgProfileLookup {
    async fn user_data_by_id(&self, user_id: &str) -> Result<Option<UserData>, IdentityError> {
        let Some(id) = parse_id(user_id) else {
            return Ok(None);
        };
        profile::user_data_by_id(&self.pool, id)
            .await
            .map_err(|e| IdentityError::Lookup(e.to_string()))
    }
}

#[derive(Clone)]
pub struct PgOrganizationLookup {
    pool: PgPool,
}

impl PgOrganizationLookup {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrganizationLookup for PgOrganizationLookup {
    async fn membership(&self, user_id: &str, organization_uuid: &str) -> Result<Option<Membership>, IdentityError> {
        let (Some(user_id), Some(organization_uuid)) = (parse_id(user_id), parse_id(organization_uuid)) else {
            return Ok(None);
        };
        organization::membership(&self.pool, user_id, organization_uuid)
            .await
            .map_err(|e| IdentityError::Lookup(e.to_string()))
    }
}
