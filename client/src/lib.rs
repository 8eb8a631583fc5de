//! Leptos client for organization-scoped pages.
//!
//! ARCHITECTURE
//! ============
//! `state` holds the session, organization and sidebar stores and the scope
//! root that owns them. `util::auth` is the auth listener state machine.
//! `net` carries HTTP calls, the `load_app_data` server function and the live
//! auth event channel. `components` and `pages` render on top of them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
