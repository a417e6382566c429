//! `routeguard-auth`: credential presence boundary.
//!
//! This crate never inspects token contents and never writes to storage on its
//! own; it only answers "is there a credential?".

pub mod credential;
pub mod lookup;
pub mod store;

pub use credential::Credential;
pub use lookup::{CredentialLookup, lookup_from_store};
pub use store::{CredentialStore, DEFAULT_CREDENTIAL_KEY, InMemoryCredentialStore, StoreError};
