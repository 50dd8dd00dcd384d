//! The credential type.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Opaque credential string. Never empty.
///
/// `Debug` output is redacted so a token cannot leak through logs.
#[derive(Clone)]
pub struct Token(SecretString);

impl Token {
    /// Wrap a raw token. Returns `None` for an empty string.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return None;
        }
        Some(Self(SecretString::from(raw)))
    }

    /// Borrow the raw token, for request headers and persistence only.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token([REDACTED])")
    }
}
