//! Extension integrating the TubeMusic settings into naviconfig
//!
//! This module provides the `TubeConfigExt` trait adding typed accessors
//! for the `tubemusic.*` configuration section to `naviconfig::Config`.

use anyhow::Result;
use naviconfig::Config;
use serde_yaml::{Number, Value};

const DEFAULT_BASE_URL: &str = "https://api.tubemusic.net/v1";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_REGION: &str = "US";
const DEFAULT_TIMEOUT_SECS: usize = 30;

/// Extension trait for the TubeMusic configuration section
///
/// # Example
///
/// ```rust,ignore
/// use naviconfig::get_config;
/// use navitube::TubeConfigExt;
///
/// let config = get_config();
/// println!("API locale: {}/{}", config.get_tube_language(), config.get_tube_region());
/// ```
pub trait TubeConfigExt {
    /// Returns the API base URL
    fn get_tube_base_url(&self) -> String;

    /// Sets the API base URL
    fn set_tube_base_url(&self, base_url: &str) -> Result<()>;

    /// Returns the content language (BCP-47 primary tag)
    fn get_tube_language(&self) -> String;

    /// Sets the content language
    fn set_tube_language(&self, language: &str) -> Result<()>;

    /// Returns the content region (ISO 3166 alpha-2)
    fn get_tube_region(&self) -> String;

    /// Sets the content region
    fn set_tube_region(&self, region: &str) -> Result<()>;

    /// Returns the request timeout in seconds
    fn get_tube_timeout_secs(&self) -> usize;

    /// Sets the request timeout in seconds
    fn set_tube_timeout_secs(&self, secs: usize) -> Result<()>;

    /// Returns the account cookie, or None if not configured
    fn get_tube_cookie(&self) -> Result<Option<String>>;

    /// Sets the account cookie
    fn set_tube_cookie(&self, cookie: &str) -> Result<()>;

    /// Returns the anonymous visitor identifier, or None if not assigned
    fn get_tube_visitor_id(&self) -> Result<Option<String>>;

    /// Sets the anonymous visitor identifier
    fn set_tube_visitor_id(&self, visitor_id: &str) -> Result<()>;

    /// Returns whether explicit content is hidden
    fn get_tube_hide_explicit(&self) -> bool;

    /// Sets whether explicit content is hidden
    fn set_tube_hide_explicit(&self, hide: bool) -> Result<()>;
}

impl TubeConfigExt for Config {
    fn get_tube_base_url(&self) -> String {
        match self.get_value(&["tubemusic", "api", "base_url"]) {
            Ok(Value::String(s)) if !s.is_empty() => s,
            _ => DEFAULT_BASE_URL.to_string(),
        }
    }

    fn set_tube_base_url(&self, base_url: &str) -> Result<()> {
        self.set_value(
            &["tubemusic", "api", "base_url"],
            Value::String(base_url.to_string()),
        )
    }

    fn get_tube_language(&self) -> String {
        match self.get_value(&["tubemusic", "api", "language"]) {
            Ok(Value::String(s)) if !s.is_empty() => s,
            _ => DEFAULT_LANGUAGE.to_string(),
        }
    }

    fn set_tube_language(&self, language: &str) -> Result<()> {
        self.set_value(
            &["tubemusic", "api", "language"],
            Value::String(language.to_string()),
        )
    }

    fn get_tube_region(&self) -> String {
        match self.get_value(&["tubemusic", "api", "region"]) {
            Ok(Value::String(s)) if !s.is_empty() => s,
            _ => DEFAULT_REGION.to_string(),
        }
    }

    fn set_tube_region(&self, region: &str) -> Result<()> {
        self.set_value(
            &["tubemusic", "api", "region"],
            Value::String(region.to_string()),
        )
    }

    fn get_tube_timeout_secs(&self) -> usize {
        match self.get_value(&["tubemusic", "api", "timeout_secs"]) {
            Ok(Value::Number(n)) if n.is_u64() => n.as_u64().unwrap() as usize,
            Ok(Value::Number(n)) if n.is_i64() => n.as_i64().unwrap() as usize,
            _ => DEFAULT_TIMEOUT_SECS,
        }
    }

    fn set_tube_timeout_secs(&self, secs: usize) -> Result<()> {
        self.set_value(
            &["tubemusic", "api", "timeout_secs"],
            Value::Number(Number::from(secs)),
        )
    }

    fn get_tube_cookie(&self) -> Result<Option<String>> {
        match self.get_value(&["tubemusic", "account", "cookie"]) {
            Ok(Value::String(s)) if !s.is_empty() => Ok(Some(s)),
            Ok(Value::String(_)) => Ok(None), // Empty string
            Ok(_) => Ok(None),                // Wrong type
            Err(_) => Ok(None),               // Not configured
        }
    }

    fn set_tube_cookie(&self, cookie: &str) -> Result<()> {
        self.set_value(
            &["tubemusic", "account", "cookie"],
            Value::String(cookie.to_string()),
        )
    }

    fn get_tube_visitor_id(&self) -> Result<Option<String>> {
        match self.get_value(&["tubemusic", "account", "visitor_id"]) {
            Ok(Value::String(s)) if !s.is_empty() => Ok(Some(s)),
            Ok(Value::String(_)) => Ok(None), // Empty string
            Ok(_) => Ok(None),                // Wrong type
            Err(_) => Ok(None),               // Not configured
        }
    }

    fn set_tube_visitor_id(&self, visitor_id: &str) -> Result<()> {
        self.set_value(
            &["tubemusic", "account", "visitor_id"],
            Value::String(visitor_id.to_string()),
        )
    }

    fn get_tube_hide_explicit(&self) -> bool {
        matches!(
            self.get_value(&["tubemusic", "content", "hide_explicit"]),
            Ok(Value::Bool(true))
        )
    }

    fn set_tube_hide_explicit(&self, hide: bool) -> Result<()> {
        self.set_value(
            &["tubemusic", "content", "hide_explicit"],
            Value::Bool(hide),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_apply_when_unset() {
        let dir = tempdir().unwrap();
        let config = Config::load_config(dir.path().to_str().unwrap()).unwrap();

        assert_eq!(config.get_tube_language(), "en");
        assert_eq!(config.get_tube_region(), "US");
        assert_eq!(config.get_tube_timeout_secs(), 30);
        assert!(config.get_tube_cookie().unwrap().is_none());
        assert!(!config.get_tube_hide_explicit());
    }

    #[test]
    fn setters_roundtrip() {
        let dir = tempdir().unwrap();
        let config = Config::load_config(dir.path().to_str().unwrap()).unwrap();

        config.set_tube_language("fr").unwrap();
        config.set_tube_region("FR").unwrap();
        config.set_tube_cookie("SESSION=abc").unwrap();
        config.set_tube_hide_explicit(true).unwrap();

        assert_eq!(config.get_tube_language(), "fr");
        assert_eq!(config.get_tube_region(), "FR");
        assert_eq!(config.get_tube_cookie().unwrap().as_deref(), Some("SESSION=abc"));
        assert!(config.get_tube_hide_explicit());
    }
}
