//! Render-target detection and hard navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth listener only arms itself in the browser and signs users out with
//! a full reload, not a router transition, so no client state survives it.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Where the current component tree is being rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderTarget {
    /// Server-side rendering; there is no live auth event stream.
    Server,
    Browser,
}

impl RenderTarget {
    #[must_use]
    pub fn current() -> Self {
        #[cfg(feature = "hydrate")]
        {
            if web_sys::window().is_some() {
                return Self::Browser;
            }
        }
        Self::Server
    }

    #[must_use]
    pub fn is_browser(self) -> bool {
        matches!(self, Self::Browser)
    }
}

/// Full-page navigation primitive.
pub trait Navigator: Send + Sync {
    /// Path component of the current location (e.g. `/dashboard/acme`).
    fn current_path(&self) -> String;
    /// Navigate with a full page load.
    fn navigate_hard_to(&self, path: &str);
}

/// `window.location` navigator.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    fn navigate_hard_to(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if window.location().assign(path).is_err() {
                    log::warn!("hard navigation to {path} failed");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}
