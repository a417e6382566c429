/// Opaque authorization token.
///
/// Presence is the only property the guard looks at. A `Credential` can only be
/// built from a non-empty string, so "empty" and "absent" collapse into `None`
/// at construction time.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw stored value; empty strings are treated as no credential.
    pub fn from_raw(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    /// Same as [`Credential::from_raw`] for a lookup that may miss.
    pub fn from_stored(stored: Option<String>) -> Option<Self> {
        stored.and_then(Self::from_raw)
    }

    /// Raw token, for transports that need to forward it.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for Credential {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_no_credential() {
        assert_eq!(Credential::from_raw(""), None);
        assert_eq!(Credential::from_stored(Some(String::new())), None);
        assert_eq!(Credential::from_stored(None), None);
    }

    #[test]
    fn non_empty_string_is_a_credential() {
        let cred = Credential::from_raw("abc123").unwrap();
        assert_eq!(cred.expose(), "abc123");
    }

    #[test]
    fn whitespace_token_still_counts_as_present() {
        // Contents are opaque; only emptiness is checked.
        assert!(Credential::from_raw(" ").is_some());
    }

    #[test]
    fn debug_does_not_leak_token() {
        let cred = Credential::from_raw("secret-token").unwrap();
        let rendered = format!("{cred:?}");
        assert!(!rendered.contains("secret-token"));
    }
}
