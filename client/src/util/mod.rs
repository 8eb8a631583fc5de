//! Browser-facing utilities shared by components and state.

pub mod auth;
pub mod navigation;
pub mod storage;
