//! Log-safe rendering of values that must never reach a log sink verbatim.

use std::fmt;

/// Field-name fragments that mark a value as secret-like.
///
/// Matching is case-insensitive and by substring, so `userPassword`, `db_pass`
/// and `X-Api-Key` are all caught.
pub const SENSITIVE_FIELD_MARKERS: &[&str] =
    &["pass", "secret", "token", "credential", "api_key", "apikey", "api-key", "private_key"];

/// Returns `true` when a field named `name` is expected to carry a secret.
#[must_use]
pub fn is_sensitive_field(name: &str) -> bool {
    let lowered = name.to_ascii_lowercase();
    SENSITIVE_FIELD_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Wraps a value so that `Display` and `Debug` only reveal its size.
///
/// ```rust
/// use sconf_logger::Redacted;
///
/// let creds = Redacted::new("admin:123456");
/// assert_eq!(creds.to_string(), "[REDACTED 12 bytes]");
/// assert_eq!(format!("{creds:?}"), "[REDACTED 12 bytes]");
/// ```
#[derive(Clone, Copy)]
pub struct Redacted<T>(T);

impl<T: AsRef<str>> Redacted<T> {
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Length of the hidden value in bytes.
    pub fn len(&self) -> usize {
        self.0.as_ref().len()
    }

    /// Gives the wrapped value back, for code that is allowed to see it.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: AsRef<str>> fmt::Display for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.len())
    }
}

impl<T: AsRef<str>> fmt::Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
