//! Client state shared through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! `ScopeRoot` owns one instance of each store per mounted organization
//! scope and provides them to descendants. Stores wrap `RwSignal`s so reads
//! participate in reactive tracking and equal replacements notify nobody.

pub mod organization;
pub mod scope;
pub mod session;
pub mod sidebar;
