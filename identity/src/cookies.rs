//! Request cookie snapshot and the cookie names shared by server and browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server builds a `RequestContext` from the inbound `Cookie` header; the
//! browser writes the same keys (organization selection, sidebar preference)
//! so the next server render can read them back.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use std::collections::BTreeMap;

use cookie::Cookie;

/// Session token cookie set by the auth routes.
pub const SESSION_COOKIE: &str = "session_token";
/// Display-language preference cookie.
pub const LANGUAGE_COOKIE: &str = "lang";
/// Persisted sidebar layout preference.
pub const SIDEBAR_STATE_COOKIE: &str = "sidebarState";

/// Durable key holding the last active organization for `user_id`.
#[must_use]
pub fn organization_cookie_name(user_id: &str) -> String {
    format!("{user_id}-organizationId")
}

/// Read-only view of the credentials carried by one inbound request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestContext {
    cookies: BTreeMap<String, String>,
}

impl RequestContext {
    /// Parse a `Cookie` header value (`a=1; b=2`). Values are percent-decoded,
    /// malformed pairs are skipped and the first occurrence of a name wins.
    #[must_use]
    pub fn from_cookie_header(header: &str) -> Self {
        let parsed: Vec<Cookie<'_>> = Cookie::split_parse_encoded(header)
            .filter_map(Result::ok)
            .collect();
        Self::from_cookies(parsed.iter())
    }

    /// Build a context from already-parsed cookies, such as a server-side
    /// cookie jar. The first occurrence of a name wins.
    #[must_use]
    pub fn from_cookies<'a, 'c: 'a>(cookies: impl IntoIterator<Item = &'a Cookie<'c>>) -> Self {
        let mut map = BTreeMap::new();
        for cookie in cookies {
            if cookie.name().is_empty() {
                continue;
            }
            map.entry(cookie.name().to_owned())
                .or_insert_with(|| cookie.value_trimmed().to_owned());
        }
        Self { cookies: map }
    }

    #[must_use]
    pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.insert(name.to_owned(), value.to_owned());
        self
    }

    /// Cookie value by name; empty values count as absent.
    #[must_use]
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.cookie(SESSION_COOKIE)
    }
}
