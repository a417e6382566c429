//! Strongly-typed route identifiers.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Absolute path of a route (e.g. `"/admin/login"`).
///
/// Always starts with `/`. Matching against incoming locations goes through
/// [`RoutePath::match_key`], so the stored spelling is kept for display and
/// redirects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePath(Cow<'static, str>);

impl RoutePath {
    /// Validate and wrap a path.
    pub fn parse(path: impl Into<Cow<'static, str>>) -> ConfigResult<Self> {
        let path = path.into();
        if !path.starts_with('/') || path.chars().any(char::is_whitespace) {
            return Err(ConfigError::invalid_path(path.into_owned()));
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key this path is matched under.
    pub fn match_key(&self) -> String {
        Self::normalize(&self.0)
    }

    /// Normalize an incoming location for matching.
    ///
    /// Drops any `?query` / `#fragment`, lowercases ASCII, and strips one
    /// trailing slash. An empty location is the root.
    pub fn normalize(location: &str) -> String {
        let end = location.find(['?', '#']).unwrap_or(location.len());
        let path = &location[..end];

        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };

        if path.is_empty() {
            return "/".to_string();
        }

        path.to_ascii_lowercase()
    }
}

impl core::fmt::Display for RoutePath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RoutePath {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&'static str> for RoutePath {
    type Error = ConfigError;

    fn try_from(value: &'static str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<RoutePath> for String {
    fn from(value: RoutePath) -> Self {
        value.0.into_owned()
    }
}

/// Route name (e.g. `"AdminLogin"`).
///
/// Names are opaque at this layer; they exist so callers can navigate by name
/// instead of spelling paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteName(Cow<'static, str>);

impl RouteName {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RouteName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for RouteName {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RouteName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_relative_and_empty_paths() {
        assert_eq!(
            RoutePath::parse("admin/login"),
            Err(ConfigError::InvalidPath("admin/login".to_string()))
        );
        assert!(RoutePath::parse("").is_err());
        assert!(RoutePath::parse("/admin login").is_err());
        assert!(RoutePath::parse("/admin/login").is_ok());
    }

    #[test]
    fn normalize_strips_query_fragment_and_trailing_slash() {
        assert_eq!(RoutePath::normalize("/admin/login/"), "/admin/login");
        assert_eq!(RoutePath::normalize("/admin/review?page=2"), "/admin/review");
        assert_eq!(RoutePath::normalize("/admin/review#top"), "/admin/review");
        assert_eq!(RoutePath::normalize("/Admin/Login"), "/admin/login");
    }

    #[test]
    fn normalize_maps_empty_and_root_to_root() {
        assert_eq!(RoutePath::normalize(""), "/");
        assert_eq!(RoutePath::normalize("/"), "/");
        assert_eq!(RoutePath::normalize("?next=/x"), "/");
    }

    #[test]
    fn deserialize_validates_paths() {
        let ok: RoutePath = serde_json::from_str("\"/admin/login\"").unwrap();
        assert_eq!(ok.as_str(), "/admin/login");

        let err = serde_json::from_str::<RoutePath>("\"admin\"");
        assert!(err.is_err());
    }

    #[test]
    fn display_keeps_declared_spelling() {
        let path = RoutePath::parse("/Admin/Review").unwrap();
        assert_eq!(path.to_string(), "/Admin/Review");
        assert_eq!(path.match_key(), "/admin/review");
    }
}
