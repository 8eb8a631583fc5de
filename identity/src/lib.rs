//! Shared session and organization model for server rendering and hydration.
//!
//! This crate owns the snapshot types that cross the SSR boundary (`AppData`,
//! `UserSession`, `Organization`) together with the server-side resolution
//! logic that builds them. Both `server` and `client` depend on it so the
//! serialized snapshot stays identical on either side.
//!
//! ERROR HANDLING
//! ==============
//! Resolution never fails from the caller's point of view. Provider and
//! lookup errors are logged and degrade to the logged-out shape.

pub mod cookies;
pub mod error;
pub mod language;
pub mod loader;
pub mod model;
pub mod resolver;

pub use cookies::RequestContext;
pub use error::IdentityError;
pub use language::{Language, Languages};
pub use loader::{AppDataLoader, OrganizationLookup};
pub use model::{
    AppData, AuthUser, Membership, MembershipRole, Organization, SidebarPreference, UiPreferences, UserData,
    UserSession,
};
pub use resolver::{IdentityProvider, ProfileLookup, ResolvedUser, SessionResolver};

#[cfg(test)]
pub(crate) mod test_helpers;
