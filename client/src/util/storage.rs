//! Durable per-user client storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The organization store and sidebar state persist small string values that
//! the next server render reads back from the request's `Cookie` header, so
//! the browser implementation writes cookies rather than `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Writes are best-effort browser-only behavior; SSR and native tests use the
//! in-memory implementation so rendering stays deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// One year, matching the lifetime of the server's session cookie.
#[cfg(any(test, feature = "hydrate"))]
const COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 365;

/// Key-value storage that survives page reloads.
pub trait DurableStorage: Send + Sync {
    fn set_value(&self, key: &str, value: &str);
    fn get_value(&self, key: &str) -> Option<String>;
}

pub type SharedStorage = Arc<dyn DurableStorage>;

/// Storage used by the current render target: cookies in the browser,
/// memory everywhere else.
pub fn browser_storage() -> SharedStorage {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(CookieStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryStorage::default())
    }
}

/// `document.cookie` assignment string for `key = value`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn cookie_assignment(key: &str, value: &str) -> String {
    use cookie::{Cookie, SameSite, time::Duration};

    Cookie::build((key, value))
        .path("/")
        .max_age(Duration::seconds(COOKIE_MAX_AGE_SECS))
        .same_site(SameSite::Lax)
        .build()
        .encoded()
        .to_string()
}

/// Cookie-backed storage readable by the server on the next request.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStorage;

impl DurableStorage for CookieStorage {
    fn set_value(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(document) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            else {
                return;
            };
            if document.set_cookie(&cookie_assignment(key, value)).is_err() {
                log::warn!("failed to write cookie {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn get_value(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())?;
            let header = document.cookie().ok()?;
            identity::RequestContext::from_cookie_header(&header)
                .cookie(key)
                .map(str::to_owned)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }
}

/// In-memory storage for server rendering and tests. Counts writes.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<BTreeMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryStorage {
    /// Number of `set_value` calls so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl DurableStorage for MemoryStorage {
    fn set_value(&self, key: &str, value: &str) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn get_value(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}
