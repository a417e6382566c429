//! Route guard: the navigation decision function.

use serde::Serialize;

use routeguard_auth::CredentialLookup;
use routeguard_core::RoutePath;

use crate::descriptor::RouteDescriptor;
use crate::table::RouteTable;

/// One navigation attempt, consumed by the guard.
#[derive(Debug, Clone, Copy)]
pub struct NavigationIntent<'a> {
    pub target: &'a RouteDescriptor,
    pub origin: Option<&'a RouteDescriptor>,
}

impl<'a> NavigationIntent<'a> {
    pub fn new(target: &'a RouteDescriptor, origin: Option<&'a RouteDescriptor>) -> Self {
        Self { target, origin }
    }
}

/// What the dispatcher should do with an intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum NavigationDecision {
    Proceed,
    Redirect(RoutePath),
}

impl NavigationDecision {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Why a decision came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    /// Target is a redirect record; it never commits.
    RedirectRecord,
    /// Target does not require authentication.
    PublicRoute,
    CredentialPresent,
    /// Target requires authentication and no (non-empty) credential was found.
    CredentialMissing,
}

/// Auditable explanation of a single decision.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionExplanation {
    pub target: String,
    pub origin: Option<String>,
    pub requires_auth: bool,
    pub decision: NavigationDecision,
    pub reason: DecisionReason,
    pub message: String,
}

/// Decides whether a navigation may proceed.
///
/// - No IO besides the injected credential read
/// - No panics
/// - Pure in (redirect target, requires_auth, credential presence)
#[derive(Debug, Clone)]
pub struct RouteGuard {
    fallback: RoutePath,
}

impl RouteGuard {
    pub fn new(fallback: RoutePath) -> Self {
        Self { fallback }
    }

    /// Guard redirecting denied navigations to the table's fallback.
    pub fn for_table(table: &RouteTable) -> Self {
        Self::new(table.fallback().clone())
    }

    pub fn fallback(&self) -> &RoutePath {
        &self.fallback
    }

    /// Decide an intent.
    ///
    /// `lookup` is only called when the target requires authentication.
    pub fn decide<L>(&self, intent: &NavigationIntent<'_>, lookup: &L) -> NavigationDecision
    where
        L: CredentialLookup + ?Sized,
    {
        let (decision, reason) = self.evaluate(intent, lookup);
        tracing::debug!(
            target_route = %intent.target.label(),
            origin = ?intent.origin.map(RouteDescriptor::label),
            ?reason,
            ?decision,
            "navigation decided"
        );
        decision
    }

    /// Decide an intent and explain why.
    pub fn explain<L>(&self, intent: &NavigationIntent<'_>, lookup: &L) -> DecisionExplanation
    where
        L: CredentialLookup + ?Sized,
    {
        let (decision, reason) = self.evaluate(intent, lookup);
        let target = intent.target.label();

        let message = match (&decision, reason) {
            (NavigationDecision::Redirect(to), DecisionReason::RedirectRecord) => {
                format!("Route '{target}' is a redirect record and forwards to {to}")
            }
            (NavigationDecision::Redirect(to), _) => {
                format!("Route '{target}' requires authentication and no credential is stored; redirecting to {to}")
            }
            (NavigationDecision::Proceed, DecisionReason::CredentialPresent) => {
                format!("Route '{target}' requires authentication and a credential is present")
            }
            (NavigationDecision::Proceed, _) => {
                format!("Route '{target}' is public")
            }
        };

        DecisionExplanation {
            target,
            origin: intent.origin.map(RouteDescriptor::label),
            requires_auth: intent.target.requires_auth,
            decision,
            reason,
            message,
        }
    }

    fn evaluate<L>(
        &self,
        intent: &NavigationIntent<'_>,
        lookup: &L,
    ) -> (NavigationDecision, DecisionReason)
    where
        L: CredentialLookup + ?Sized,
    {
        if let Some(to) = &intent.target.redirect {
            return (
                NavigationDecision::Redirect(to.clone()),
                DecisionReason::RedirectRecord,
            );
        }

        if !intent.target.requires_auth {
            return (NavigationDecision::Proceed, DecisionReason::PublicRoute);
        }

        match lookup.lookup() {
            Some(_) => (NavigationDecision::Proceed, DecisionReason::CredentialPresent),
            None => (
                NavigationDecision::Redirect(self.fallback.clone()),
                DecisionReason::CredentialMissing,
            ),
        }
    }
}
