//! REST and server-function helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are only
//! meaningful in the browser. `load_app_data` is a Leptos server function and
//! runs in-process during SSR.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so auth fetch failures
//! degrade to the logged-out view without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use identity::{AppData, AuthUser};
use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";
#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

#[cfg(any(test, feature = "hydrate"))]
fn logout_failed_message(status: u16) -> String {
    format!("logout failed: {status}")
}

/// Fetch the currently authenticated identity from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<AuthUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CURRENT_USER_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<AuthUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            Ok(resp) if resp.ok() => {}
            Ok(resp) => log::warn!("{}", logout_failed_message(resp.status())),
            Err(e) => log::warn!("logout request failed: {e}"),
        }
    }
}

/// Load the organization-scope snapshot for the current request.
///
/// `organization` is the route's organization uuid; `None` restores the
/// user's last active organization from its durable cookie.
///
/// # Errors
///
/// Fails only when the server did not provide the app-data loader or request
/// parts context; resolution failures degrade to a logged-out `AppData`.
#[server]
pub async fn load_app_data(organization: Option<String>) -> Result<AppData, ServerFnError> {
    use identity::{AppDataLoader, RequestContext};

    let loader = use_context::<AppDataLoader>().ok_or_else(|| ServerFnError::new("app data loader not provided"))?;
    let parts =
        use_context::<http::request::Parts>().ok_or_else(|| ServerFnError::new("request parts not available"))?;

    let jar = axum_extra::extract::cookie::CookieJar::from_headers(&parts.headers);
    let ctx = RequestContext::from_cookies(jar.iter());

    Ok(loader.load(&ctx, organization.as_deref()).await)
}
