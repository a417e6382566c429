//! Credential storage read interface.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

/// Key the admin token is stored under by the login flow.
pub const DEFAULT_CREDENTIAL_KEY: &str = "admin_token";

/// Key-value read access to wherever the login flow keeps its token.
///
/// `get` is total: a missing key is `None`, never an error.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Write failed due to internal lock poisoning.
    #[error("credential store lock poisoned")]
    Poisoned,
}

/// In-memory credential store for tests/dev and embedders without a browser.
///
/// Writes exist only here; the guard side of the workspace reads through
/// [`CredentialStore`].
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`, replacing any previous one.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.into(), value.into());
        Ok(())
    }

    /// Remove `key`; returns whether anything was stored.
    pub fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.remove(key).is_some())
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        // A poisoned lock reads as "no credential": the guard then redirects
        // to the fallback instead of granting access.
        match self.entries.read() {
            Ok(entries) => entries.get(key).cloned(),
            Err(_) => {
                tracing::warn!(key, "credential store lock poisoned; treating as absent");
                None
            }
        }
    }
}

impl<S: CredentialStore + ?Sized> CredentialStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let store = InMemoryCredentialStore::new();
        assert_eq!(store.get(DEFAULT_CREDENTIAL_KEY), None);
    }

    #[test]
    fn set_then_get_then_remove() {
        let store = InMemoryCredentialStore::new();
        store.set(DEFAULT_CREDENTIAL_KEY, "abc123").unwrap();
        assert_eq!(store.get(DEFAULT_CREDENTIAL_KEY).as_deref(), Some("abc123"));

        assert!(store.remove(DEFAULT_CREDENTIAL_KEY).unwrap());
        assert!(!store.remove(DEFAULT_CREDENTIAL_KEY).unwrap());
        assert_eq!(store.get(DEFAULT_CREDENTIAL_KEY), None);
    }

    #[test]
    fn keys_are_independent() {
        let store = InMemoryCredentialStore::new();
        store.set("other_token", "zzz").unwrap();
        assert_eq!(store.get(DEFAULT_CREDENTIAL_KEY), None);
    }
}
