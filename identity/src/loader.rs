//! Organization-scope app-data loader.
//!
//! SYSTEM CONTEXT
//! ==============
//! Called by the `/dashboard` server function. Composes the resolver output
//! with the active organization and persisted UI preferences into the single
//! `AppData` snapshot the scope layout seeds its stores from.
//!
//! The active organization comes from the route when present, otherwise from
//! the durable `{userId}-organizationId` cookie written by the browser on the
//! previous visit. The membership lookup also yields the session role, which
//! is why the role is filled in here and not by the resolver.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::sync::Arc;

use crate::cookies::{RequestContext, SIDEBAR_STATE_COOKIE, organization_cookie_name};
use crate::error::IdentityError;
use crate::model::{AppData, Membership, Organization, SidebarPreference, UiPreferences, UserSession};
use crate::resolver::{ResolvedUser, SessionResolver};

/// Looks up an organization the user is a member of.
#[async_trait::async_trait]
pub trait OrganizationLookup: Send + Sync {
    async fn membership(&self, user_id: &str, organization_uuid: &str) -> Result<Option<Membership>, IdentityError>;
}

#[derive(Clone)]
pub struct AppDataLoader {
    resolver: SessionResolver,
    organizations: Arc<dyn OrganizationLookup>,
}

impl AppDataLoader {
    #[must_use]
    pub fn new(resolver: SessionResolver, organizations: Arc<dyn OrganizationLookup>) -> Self {
        Self { resolver, organizations }
    }

    #[must_use]
    pub fn resolver(&self) -> &SessionResolver {
        &self.resolver
    }

    /// Load the scope snapshot for `ctx`. `organization` is the route's
    /// organization uuid, if the route has one.
    pub async fn load(&self, ctx: &RequestContext, organization: Option<&str>) -> AppData {
        let ui = UiPreferences { sidebar_state: SidebarPreference::from_cookie(ctx.cookie(SIDEBAR_STATE_COOKIE)) };
        let ResolvedUser { session, language } = self.resolver.resolve(ctx).await;

        let Some(mut session) = session else {
            return AppData { session: None, organization: None, language, ui };
        };

        let organization = self.active_organization(ctx, &mut session, organization).await;
        AppData { session: Some(session), organization, language, ui }
    }

    async fn active_organization(
        &self,
        ctx: &RequestContext,
        session: &mut UserSession,
        requested: Option<&str>,
    ) -> Option<Organization> {
        let user_id = session.user_id()?.to_owned();
        let uuid = requested
            .map(str::trim)
            .filter(|uuid| !uuid.is_empty())
            .or_else(|| ctx.cookie(&organization_cookie_name(&user_id)))?;

        match self.organizations.membership(&user_id, uuid).await {
            Ok(Some(membership)) => {
                session.role = membership.role;
                Some(membership.organization)
            }
            Ok(None) => {
                tracing::debug!(%user_id, organization = %uuid, "no membership for requested organization");
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, %user_id, organization = %uuid, "organization lookup failed");
                None
            }
        }
    }
}
