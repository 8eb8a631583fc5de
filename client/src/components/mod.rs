//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the scope stores from Leptos context; only
//! `organization_scope_layout` creates them.

pub mod app_sidebar;
pub mod auth_change_listener;
pub mod organization_overview;
pub mod organization_scope_layout;
pub mod sign_out_button;
