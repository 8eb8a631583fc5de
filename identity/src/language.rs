//! Display-language resolution from the language preference cookie.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE: &str = "en";

/// BCP-47-ish language tag, lowercased (e.g. `"en"`, `"pt-br"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(tag.trim().to_ascii_lowercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE.to_owned())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Supported languages plus the fallback applied when the cookie is absent or invalid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Languages {
    default: Language,
    supported: Vec<Language>,
}

impl Languages {
    /// Build a language set. The default is always considered supported.
    #[must_use]
    pub fn new(default: &str, supported: &[&str]) -> Self {
        let default = Language::new(default);
        let mut list: Vec<Language> = supported
            .iter()
            .map(|tag| Language::new(tag))
            .filter(|lang| !lang.as_str().is_empty())
            .collect();
        if !list.contains(&default) {
            list.push(default.clone());
        }
        Self { default, supported: list }
    }

    #[must_use]
    pub fn default_language(&self) -> &Language {
        &self.default
    }

    #[must_use]
    pub fn supported(&self) -> &[Language] {
        &self.supported
    }

    /// Resolve the cookie token to a supported language, falling back to the default.
    #[must_use]
    pub fn resolve(&self, cookie: Option<&str>) -> Language {
        cookie
            .map(Language::new)
            .filter(|lang| self.supported.contains(lang))
            .unwrap_or_else(|| self.default.clone())
    }
}

impl Default for Languages {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE, &[DEFAULT_LANGUAGE])
    }
}
