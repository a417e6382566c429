//! Route descriptors: what the table is made of.

use serde::Serialize;

use routeguard_core::{RouteName, RoutePath};

/// How a descriptor matches incoming locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathPattern {
    /// Matches one path (see [`RoutePath::normalize`] for the rules).
    Exact(RoutePath),

    /// Matches everything; used as the table's default entry.
    Wildcard,
}

impl PathPattern {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// Returns whether this pattern accepts an already-normalized location.
    pub fn matches(&self, normalized: &str) -> bool {
        match self {
            Self::Exact(path) => path.match_key() == normalized,
            Self::Wildcard => true,
        }
    }
}

impl core::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Exact(path) => core::fmt::Display::fmt(path, f),
            Self::Wildcard => f.write_str("*"),
        }
    }
}

/// One entry of the route table.
///
/// Immutable once the table is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub path: PathPattern,
    pub name: Option<RouteName>,
    pub requires_auth: bool,

    /// Redirect target. A descriptor with one never commits.
    pub redirect: Option<RoutePath>,
}

impl RouteDescriptor {
    /// A publicly reachable page.
    pub fn public(path: RoutePath, name: impl Into<RouteName>) -> Self {
        Self {
            path: PathPattern::Exact(path),
            name: Some(name.into()),
            requires_auth: false,
            redirect: None,
        }
    }

    /// A page gated behind a credential.
    pub fn protected(path: RoutePath, name: impl Into<RouteName>) -> Self {
        Self {
            requires_auth: true,
            ..Self::public(path, name)
        }
    }

    /// Catch-all entry redirecting everything it matches to `target`.
    pub fn catch_all(target: RoutePath) -> Self {
        Self {
            path: PathPattern::Wildcard,
            name: None,
            requires_auth: false,
            redirect: Some(target),
        }
    }

    pub fn is_redirect(&self) -> bool {
        self.redirect.is_some()
    }

    /// Display label for logs: the name if any, else the path pattern.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.to_string(),
            None => self.path.to_string(),
        }
    }
}
