//! Reference navigation dispatcher.
//!
//! Runs the guard once per intent before anything is committed, follows
//! redirect decisions, and remembers the committed route as the origin of the
//! next attempt. Rendering is left to the caller.

use serde::Serialize;
use thiserror::Error;

use routeguard_auth::CredentialLookup;
use routeguard_core::RoutePath;

use crate::descriptor::{PathPattern, RouteDescriptor};
use crate::guard::{NavigationDecision, NavigationIntent, RouteGuard};
use crate::table::RouteTable;

/// Upper bound on guard decisions per navigation. A validated table needs at
/// most three.
const MAX_DECISIONS: usize = 4;

/// Result of a settled navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Location the caller asked for.
    pub requested: String,

    /// Descriptor that was committed.
    pub committed: RouteDescriptor,

    /// Redirect targets followed, in order.
    pub redirects: Vec<RoutePath>,
}

impl Navigation {
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }

    /// Path of the committed route.
    pub fn committed_path(&self) -> Option<&RoutePath> {
        match &self.committed.path {
            PathPattern::Exact(path) => Some(path),
            PathPattern::Wildcard => None,
        }
    }
}

/// Ticket for an in-flight navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    generation: u64,
    location: String,
}

impl PendingNavigation {
    pub fn location(&self) -> &str {
        &self.location
    }
}

/// A newer intent arrived before this one completed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("navigation to {location} superseded by a newer intent")]
pub struct NavigationSuperseded {
    pub location: String,
}

/// Synchronous navigation dispatcher.
///
/// Last intent wins: only the most recent [`PendingNavigation`] can commit.
#[derive(Debug)]
pub struct Navigator {
    table: RouteTable,
    guard: RouteGuard,
    current: Option<RouteDescriptor>,
    generation: u64,
}

impl Navigator {
    pub fn new(table: RouteTable) -> Self {
        let guard = RouteGuard::for_table(&table);
        Self {
            table,
            guard,
            current: None,
            generation: 0,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Last committed route, if any navigation has completed.
    pub fn current(&self) -> Option<&RouteDescriptor> {
        self.current.as_ref()
    }

    /// Start a navigation; invalidates every ticket issued before it.
    pub fn begin(&mut self, location: impl Into<String>) -> PendingNavigation {
        self.generation += 1;
        PendingNavigation {
            generation: self.generation,
            location: location.into(),
        }
    }

    /// Decide and commit a pending navigation.
    ///
    /// A superseded ticket is discarded without touching the current route.
    pub fn complete<L>(
        &mut self,
        pending: PendingNavigation,
        lookup: &L,
    ) -> Result<Navigation, NavigationSuperseded>
    where
        L: CredentialLookup + ?Sized,
    {
        if pending.generation != self.generation {
            tracing::warn!(
                location = %pending.location,
                ticket = pending.generation,
                latest = self.generation,
                "discarding superseded navigation"
            );
            return Err(NavigationSuperseded {
                location: pending.location,
            });
        }

        Ok(self.commit(&pending.location, lookup))
    }

    /// Navigate to a location and commit the outcome.
    pub fn navigate<L>(&mut self, location: &str, lookup: &L) -> Navigation
    where
        L: CredentialLookup + ?Sized,
    {
        let pending = self.begin(location);
        self.commit(&pending.location, lookup)
    }

    /// Navigate to a named route; `None` if no route carries that name.
    pub fn navigate_to_name<L>(&mut self, name: &str, lookup: &L) -> Option<Navigation>
    where
        L: CredentialLookup + ?Sized,
    {
        let location = match &self.table.by_name(name)?.path {
            PathPattern::Exact(path) => path.to_string(),
            PathPattern::Wildcard => return None,
        };
        Some(self.navigate(&location, lookup))
    }

    fn commit<L>(&mut self, location: &str, lookup: &L) -> Navigation
    where
        L: CredentialLookup + ?Sized,
    {
        let navigation = self.settle(location, lookup);
        tracing::debug!(
            requested = %navigation.requested,
            committed = %navigation.committed.label(),
            redirects = navigation.redirects.len(),
            "navigation committed"
        );
        self.current = Some(navigation.committed.clone());
        navigation
    }

    fn settle<L>(&self, location: &str, lookup: &L) -> Navigation
    where
        L: CredentialLookup + ?Sized,
    {
        let mut origin = self.current.as_ref();
        let mut target = self.table.resolve(location);
        let mut redirects = Vec::new();

        for _ in 0..MAX_DECISIONS {
            match self.guard.decide(&NavigationIntent::new(target, origin), lookup) {
                NavigationDecision::Proceed => {
                    return Navigation {
                        requested: location.to_string(),
                        committed: target.clone(),
                        redirects,
                    };
                }
                NavigationDecision::Redirect(to) => {
                    tracing::info!(from = %target.label(), to = %to, "navigation redirected");
                    origin = Some(target);
                    target = self.table.resolve(to.as_str());
                    redirects.push(to);
                }
            }
        }

        tracing::warn!(
            requested = location,
            "redirect limit reached; committing fallback route"
        );
        Navigation {
            requested: location.to_string(),
            committed: self.table.fallback_route().clone(),
            redirects,
        }
    }
}
