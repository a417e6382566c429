//! Configuration error model.

use thiserror::Error;

/// Result type used when building route configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Route configuration error.
///
/// Navigation itself cannot fail; every one of these is raised at startup while
/// a route table is being validated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The table has no descriptors at all.
    #[error("route table is empty")]
    Empty,

    /// No catch-all entry was declared.
    #[error("route table has no wildcard entry")]
    MissingWildcard,

    /// The catch-all is shadowing entries declared after it.
    #[error("wildcard entry must be the last route")]
    WildcardNotLast,

    #[error("route table declares more than one wildcard entry")]
    DuplicateWildcard,

    /// The catch-all must redirect somewhere; it never commits.
    #[error("wildcard entry has no redirect target")]
    WildcardWithoutRedirect,

    /// A path was empty or not absolute.
    #[error("invalid route path: {0:?}")]
    InvalidPath(String),

    #[error("duplicate route path: {0}")]
    DuplicatePath(String),

    #[error("duplicate route name: {0}")]
    DuplicateName(String),

    /// The fallback does not resolve to a committable route.
    #[error("fallback path {0} does not resolve to a declared route")]
    UnreachableFallback(String),

    /// The fallback route is itself guarded, so navigation could deadlock.
    #[error("fallback path {0} requires authentication")]
    FallbackRequiresAuth(String),

    /// A redirect target resolves to another redirect record.
    #[error("redirect to {0} lands on another redirect")]
    RedirectChain(String),

    /// Malformed configuration document.
    #[error("invalid route configuration: {0}")]
    Parse(String),
}

impl ConfigError {
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath(path.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
