//! Networking modules for HTTP calls and the live auth event stream.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and the app-data server function, and
//! `auth_events` carries identity-provider changes to subscribed listeners.

pub mod api;
pub mod auth_events;
