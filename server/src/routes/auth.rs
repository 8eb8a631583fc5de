//! Auth routes: current identity, logout, and development sign-in.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use identity::AuthUser;
use identity::cookies::SESSION_COOKIE;
use serde::Deserialize;
use time::Duration;

use crate::services::{organization, profile, session};
use crate::state::AppState;

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated identity extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct Authenticated {
    pub user: AuthUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for Authenticated
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(SESSION_COOKIE).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session validation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me`: return the current identity.
pub async fn me(auth: Authenticated) -> Json<AuthUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: Authenticated) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, user_id = %auth.user.id, "session delete failed");
    }

    let jar = CookieJar::new().add(cleared_session_cookie(state.config.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct DevSessionRequest {
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Create an organization with this name owned by the user.
    #[serde(default)]
    pub organization: Option<String>,
}

/// `POST /api/dev/session`: development sign-in without an external
/// identity provider.
///
/// Enabled only when `DEV_LOGIN_ENABLED=true`; 404 otherwise.
pub async fn dev_session(
    State(state): State<AppState>,
    Json(req): Json<DevSessionRequest>,
) -> Result<impl IntoResponse, StatusCode> {
    if !state.config.dev_login_enabled {
        return Err(StatusCode::NOT_FOUND);
    }
    let email = profile::normalize_email(&req.email).ok_or(StatusCode::BAD_REQUEST)?;
    let display_name = req.display_name.as_deref().map(str::trim).filter(|n| !n.is_empty());

    let user_id = profile::upsert_user_by_email(&state.pool, &email, display_name)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "dev user upsert failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let organization_uuid = match req.organization.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => Some(organization::create_owned(&state.pool, user_id, name).await.map_err(|e| {
            tracing::error!(error = %e, "dev organization create failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?),
        None => None,
    };

    let token = session::create_session(&state.pool, user_id).await.map_err(|e| {
        tracing::error!(error = %e, "session creation failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    tracing::info!(%user_id, "dev session created");
    let jar = CookieJar::new().add(session_cookie(token, state.config.cookie_secure));
    let body = serde_json::json!({
        "user": AuthUser { id: user_id.to_string(), email: Some(email), phone: None },
        "organization": organization_uuid.map(|uuid| uuid.to_string()),
    });
    Ok((jar, Json(body)))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
