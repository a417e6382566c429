//! Injected credential lookup capability.
//!
//! The guard receives one of these per decision instead of reaching for a
//! global store, which keeps decisions testable with a plain closure.

use crate::credential::Credential;
use crate::store::CredentialStore;

/// Side-effecting read of the current credential, if any.
///
/// Implemented for any `Fn() -> Option<Credential>`.
pub trait CredentialLookup {
    fn lookup(&self) -> Option<Credential>;
}

impl<F> CredentialLookup for F
where
    F: Fn() -> Option<Credential>,
{
    fn lookup(&self) -> Option<Credential> {
        self()
    }
}

/// Build a lookup that reads `key` from `store` on every call.
pub fn lookup_from_store<'a, S>(store: &'a S, key: &'a str) -> impl CredentialLookup + 'a
where
    S: CredentialStore + ?Sized,
{
    move || {
        let found = Credential::from_stored(store.get(key));
        tracing::trace!(key, present = found.is_some(), "credential lookup");
        found
    }
}
