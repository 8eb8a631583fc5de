//! Server Session Resolver.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per server render, before any HTML is produced, and turns the
//! request's credentials into a `UserSession` snapshot plus display language.
//!
//! ERROR HANDLING
//! ==============
//! `resolve` is infallible. Identity failures render a logged-out view; a
//! failed profile lookup keeps the identity and drops only the profile row.
//! Whether a missing profile is itself a problem is the caller's decision.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use std::sync::Arc;

use crate::cookies::{LANGUAGE_COOKIE, RequestContext};
use crate::error::IdentityError;
use crate::language::{Language, Languages};
use crate::model::{AuthUser, UserData, UserSession};

/// Identity provider bound to an inbound request.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Current authenticated identity, `Ok(None)` when the request carries none.
    async fn current_user(&self, ctx: &RequestContext) -> Result<Option<AuthUser>, IdentityError>;
}

/// Profile row lookup, tolerant of not-found.
#[async_trait::async_trait]
pub trait ProfileLookup: Send + Sync {
    async fn user_data_by_id(&self, user_id: &str) -> Result<Option<UserData>, IdentityError>;
}

/// Resolver output: always well-formed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedUser {
    pub session: Option<UserSession>,
    pub language: Language,
}

#[derive(Clone)]
pub struct SessionResolver {
    identity: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileLookup>,
    languages: Languages,
}

impl SessionResolver {
    #[must_use]
    pub fn new(identity: Arc<dyn IdentityProvider>, profiles: Arc<dyn ProfileLookup>, languages: Languages) -> Self {
        Self { identity, profiles, languages }
    }

    #[must_use]
    pub fn languages(&self) -> &Languages {
        &self.languages
    }

    /// Resolve the session snapshot and display language for `ctx`.
    pub async fn resolve(&self, ctx: &RequestContext) -> ResolvedUser {
        let language = self.languages.resolve(ctx.cookie(LANGUAGE_COOKIE));

        let auth = match self.current_identity(ctx).await {
            Ok(Some(auth)) => auth,
            Ok(None) => return ResolvedUser { session: None, language },
            Err(e) => {
                tracing::warn!(error = %e, "identity resolution failed; rendering logged out");
                return ResolvedUser { session: None, language };
            }
        };

        let data = match self.profiles.user_data_by_id(&auth.id).await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(error = %e, user_id = %auth.id, "profile lookup failed; keeping identity without profile");
                None
            }
        };

        ResolvedUser { session: Some(UserSession { auth: Some(auth), data, role: None }), language }
    }

    async fn current_identity(&self, ctx: &RequestContext) -> Result<Option<AuthUser>, IdentityError> {
        let Some(auth) = self.identity.current_user(ctx).await? else {
            return Ok(None);
        };
        if auth.id.trim().is_empty() {
            return Err(IdentityError::Malformed("identity has an empty id".to_owned()));
        }
        Ok(Some(auth))
    }
}
