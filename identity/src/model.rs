//! Session, organization and app-data snapshot types.
//!
//! DESIGN
//! ======
//! These are the values handed from the server render to the browser. They
//! are replaced wholesale, never patched field by field, so every type is a
//! plain `Clone + PartialEq` value and equality doubles as change detection.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

use crate::language::Language;

// =============================================================================
// IDENTITY
// =============================================================================

/// Identity as reported by the identity provider for a live credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Provider-assigned user identifier.
    pub id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl AuthUser {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), email: None, phone: None }
    }
}

/// Profile row looked up by identity id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub id: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub onboarded: bool,
}

/// Role of the user inside the active organization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipRole {
    Member,
    Admin,
    Owner,
}

impl MembershipRole {
    /// Parse the role column value. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "member" => Some(Self::Member),
            "admin" => Some(Self::Admin),
            "owner" => Some(Self::Owner),
            _ => None,
        }
    }
}

/// The authenticated principal as known to one page render.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub auth: Option<AuthUser>,
    pub data: Option<UserData>,
    /// Supplied by the caller of the resolver, never by the resolver itself.
    pub role: Option<MembershipRole>,
}

impl UserSession {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    /// Identity id of the principal, if authenticated.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.auth.as_ref().map(|auth| auth.id.as_str())
    }

    /// Profile row, hidden whenever `auth` is absent.
    #[must_use]
    pub fn profile(&self) -> Option<&UserData> {
        self.auth.as_ref().and(self.data.as_ref())
    }
}

// =============================================================================
// ORGANIZATION
// =============================================================================

/// Tenant scope selected for the current view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub uuid: String,
    pub name: String,
    pub logo_url: Option<String>,
}

impl Organization {
    /// Stable identifier, or `None` when the row carries a blank uuid.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        let uuid = self.uuid.trim();
        (!uuid.is_empty()).then_some(uuid)
    }
}

/// Organization the user belongs to, with their role in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Membership {
    pub organization: Organization,
    pub role: Option<MembershipRole>,
}

// =============================================================================
// UI PREFERENCES
// =============================================================================

/// Persisted sidebar layout preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarPreference {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarPreference {
    /// Read the preference from its cookie value; anything unrecognized is `Expanded`.
    #[must_use]
    pub fn from_cookie(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("collapsed") => Self::Collapsed,
            _ => Self::Expanded,
        }
    }

    #[must_use]
    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed { Self::Collapsed } else { Self::Expanded }
    }

    #[must_use]
    pub fn as_cookie_value(self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
        }
    }

    #[must_use]
    pub fn is_collapsed(self) -> bool {
        matches!(self, Self::Collapsed)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    pub sidebar_state: SidebarPreference,
}

// =============================================================================
// APP DATA
// =============================================================================

/// Everything the organization scope needs from one server render.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppData {
    pub session: Option<UserSession>,
    pub organization: Option<Organization>,
    pub language: Language,
    pub ui: UiPreferences,
}
