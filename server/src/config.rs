//! Server configuration parsed from environment variables.
//!
//! Required:
//! - `DATABASE_URL`
//!
//! Optional:
//! - `PORT`: default 3000
//! - `DB_MAX_CONNECTIONS`: default 5
//! - `COOKIE_SECURE`: mark cookies `Secure`, default false
//! - `DEFAULT_LANGUAGE`: default `en`
//! - `SUPPORTED_LANGUAGES`: comma-separated, default language always included
//! - `DEV_LOGIN_ENABLED`: enable `POST /api/dev/session`, default false

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use identity::Languages;
use identity::language::DEFAULT_LANGUAGE;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub cookie_secure: bool,
    pub languages: Languages,
    pub dev_login_enabled: bool,
}

impl ServerConfig {
    /// Build config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let db_max_connections =
            parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS)?;
        let cookie_secure = lookup("COOKIE_SECURE").as_deref().and_then(parse_bool).unwrap_or(false);
        let dev_login_enabled = lookup("DEV_LOGIN_ENABLED").as_deref().and_then(parse_bool).unwrap_or(false);

        let default_language = lookup("DEFAULT_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned());
        let supported = lookup("SUPPORTED_LANGUAGES").unwrap_or_default();
        let supported: Vec<&str> = supported
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let languages = Languages::new(&default_language, &supported);

        Ok(Self { database_url, port, db_max_connections, cookie_secure, languages, dev_login_enabled })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
