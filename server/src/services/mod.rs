//! Domain services used by HTTP routes and the app-data loader.
//!
//! ARCHITECTURE
//! ============
//! Service modules own persistence concerns so route handlers can stay
//! focused on protocol translation and auth plumbing. `lookup` adapts them
//! to the lookup traits the shared resolver depends on.

pub mod lookup;
pub mod organization;
pub mod profile;
pub mod session;
