//! Route table configuration (JSON) and guard settings.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use routeguard_auth::DEFAULT_CREDENTIAL_KEY;
use routeguard_core::{ConfigError, ConfigResult, RouteName, RoutePath};

use crate::descriptor::{PathPattern, RouteDescriptor};
use crate::table::RouteTable;

/// Environment variable overriding the credential storage key.
pub const CREDENTIAL_KEY_ENV: &str = "ROUTEGUARD_CREDENTIAL_KEY";

/// Spelling of the catch-all pattern in configuration files.
pub const WILDCARD_PATTERN: &str = "*";

/// One route entry as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteConfig {
    /// Absolute path, or `"*"` for the catch-all.
    pub path: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub requires_auth: bool,

    #[serde(default)]
    pub redirect: Option<RoutePath>,
}

impl RouteConfig {
    fn into_descriptor(self) -> ConfigResult<RouteDescriptor> {
        let path = if self.path == WILDCARD_PATTERN {
            PathPattern::Wildcard
        } else {
            PathPattern::Exact(RoutePath::parse(self.path)?)
        };

        Ok(RouteDescriptor {
            path,
            name: self.name.map(RouteName::from),
            requires_auth: self.requires_auth,
            redirect: self.redirect,
        })
    }
}

/// Whole route table document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteTableConfig {
    pub fallback: RoutePath,

    #[serde(default = "default_credential_key")]
    pub credential_key: String,

    pub routes: Vec<RouteConfig>,
}

fn default_credential_key() -> String {
    DEFAULT_CREDENTIAL_KEY.to_string()
}

impl RouteTableConfig {
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        serde_json::from_str(raw).map_err(|e| ConfigError::parse(e.to_string()))
    }

    /// Build and validate the route table described by this document.
    pub fn into_table(self) -> ConfigResult<RouteTable> {
        let routes = self
            .routes
            .into_iter()
            .map(RouteConfig::into_descriptor)
            .collect::<ConfigResult<Vec<_>>>()?;

        RouteTable::new(self.fallback, routes)
    }
}

/// Read a route table document from disk.
pub fn load_route_config(path: impl AsRef<Path>) -> anyhow::Result<RouteTableConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read route config {}", path.display()))?;

    let config = RouteTableConfig::from_json_str(&raw)
        .with_context(|| format!("failed to parse route config {}", path.display()))?;

    tracing::info!(path = %path.display(), routes = config.routes.len(), "loaded route config");
    Ok(config)
}

/// Process-level guard settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardSettings {
    /// Key the credential is read under.
    pub credential_key: String,
}

impl GuardSettings {
    /// Settings from the environment, defaulting to `admin_token`.
    pub fn from_env() -> Self {
        Self::with_default(DEFAULT_CREDENTIAL_KEY)
    }

    /// Settings from a config document; the environment still wins.
    pub fn from_config(config: &RouteTableConfig) -> Self {
        Self::with_default(&config.credential_key)
    }

    fn with_default(default: &str) -> Self {
        let credential_key = std::env::var(CREDENTIAL_KEY_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string());

        Self { credential_key }
    }
}
