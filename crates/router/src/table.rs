//! Ordered route table with total resolution.

use std::collections::{HashMap, HashSet};

use routeguard_core::{ConfigError, ConfigResult, RoutePath};

use crate::descriptor::{PathPattern, RouteDescriptor};

/// Validated, immutable route table.
///
/// Construction enforces:
/// - exactly one wildcard, declared last, carrying a redirect target
/// - no duplicate paths or names
/// - the fallback resolves to a committable route that does not require auth
/// - redirect targets never land on another redirect
///
/// With these in place every navigation settles after at most three decisions.
#[derive(Debug, Clone)]
pub struct RouteTable {
    fallback: RoutePath,
    routes: Vec<RouteDescriptor>,
    names: HashMap<String, usize>,
    wildcard: usize,
}

impl RouteTable {
    /// Validate `routes` (in declaration order) against `fallback`.
    pub fn new(fallback: RoutePath, routes: Vec<RouteDescriptor>) -> ConfigResult<Self> {
        match Self::build(fallback, routes) {
            Ok(table) => {
                tracing::debug!(
                    routes = table.routes.len(),
                    fallback = %table.fallback,
                    "route table built"
                );
                Ok(table)
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected route table configuration");
                Err(e)
            }
        }
    }

    fn build(fallback: RoutePath, routes: Vec<RouteDescriptor>) -> ConfigResult<Self> {
        if routes.is_empty() {
            return Err(ConfigError::Empty);
        }

        let wildcards: Vec<usize> = routes
            .iter()
            .enumerate()
            .filter(|(_, r)| r.path.is_wildcard())
            .map(|(i, _)| i)
            .collect();

        let wildcard = match wildcards.as_slice() {
            [] => return Err(ConfigError::MissingWildcard),
            [only] => *only,
            _ => return Err(ConfigError::DuplicateWildcard),
        };
        if wildcard != routes.len() - 1 {
            return Err(ConfigError::WildcardNotLast);
        }
        if routes[wildcard].redirect.is_none() {
            return Err(ConfigError::WildcardWithoutRedirect);
        }

        let mut paths = HashSet::new();
        let mut names = HashMap::new();
        for (index, route) in routes.iter().enumerate() {
            if let PathPattern::Exact(path) = &route.path {
                if !paths.insert(path.match_key()) {
                    return Err(ConfigError::DuplicatePath(path.to_string()));
                }
            }
            if let Some(name) = &route.name {
                if names.insert(name.as_str().to_string(), index).is_some() {
                    return Err(ConfigError::DuplicateName(name.to_string()));
                }
            }
        }

        let table = Self {
            fallback,
            routes,
            names,
            wildcard,
        };
        table.check_fallback()?;
        table.check_redirects()?;
        Ok(table)
    }

    fn check_fallback(&self) -> ConfigResult<()> {
        let target = self.resolve(self.fallback.as_str());
        if target.path.is_wildcard() || target.is_redirect() {
            return Err(ConfigError::UnreachableFallback(self.fallback.to_string()));
        }
        if target.requires_auth {
            return Err(ConfigError::FallbackRequiresAuth(self.fallback.to_string()));
        }
        Ok(())
    }

    fn check_redirects(&self) -> ConfigResult<()> {
        for target in self.routes.iter().filter_map(|r| r.redirect.as_ref()) {
            if self.resolve(target.as_str()).is_redirect() {
                return Err(ConfigError::RedirectChain(target.to_string()));
            }
        }
        Ok(())
    }

    /// Resolve a location to exactly one descriptor.
    ///
    /// Entries are tried in declaration order; anything unmatched lands on the
    /// wildcard, so this never fails.
    pub fn resolve(&self, location: &str) -> &RouteDescriptor {
        let normalized = RoutePath::normalize(location);
        self.routes
            .iter()
            .find(|r| r.path.matches(&normalized))
            .unwrap_or(&self.routes[self.wildcard])
    }

    /// Named-route lookup.
    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.names.get(name).map(|&i| &self.routes[i])
    }

    /// Global fallback path used when a guarded route is denied.
    pub fn fallback(&self) -> &RoutePath {
        &self.fallback
    }

    /// Descriptor the fallback path commits to.
    pub fn fallback_route(&self) -> &RouteDescriptor {
        self.resolve(self.fallback.as_str())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }
}
