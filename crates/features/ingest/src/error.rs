use sconf_kernel::security::KeyGuardError;
use std::borrow::Cow;

/// Error types of the ingestion pipeline.
///
/// None of the variants carries a value taken from the payload: the parse error only
/// reports positions, the pollution error a fixed key name, the validation error a field
/// name and a fixed reason.
#[sconf_derive::sconf_error]
pub enum IngestError {
    /// The payload is not well-formed JSON.
    #[error("Malformed configuration payload{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The payload is not a plain object, carries a reserved key, or nests too deeply.
    #[error("Configuration payload rejected{}: {source}", format_context(.context))]
    Pollution { source: KeyGuardError, context: Option<Cow<'static, str>> },

    /// A recognised field holds an unacceptable value (strict mode only).
    #[error("Invalid value for '{field}'{}: {reason}", format_context(.context))]
    Validation {
        field: &'static str,
        reason: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues.
    #[error("Internal ingestion error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl IngestError {
    /// The reserved key that caused a rejection, if that is what happened.
    #[must_use]
    pub const fn offending_key(&self) -> Option<&'static str> {
        match self {
            Self::Pollution { source: KeyGuardError::ReservedKey { key, .. }, .. } => Some(*key),
            _ => None,
        }
    }

    /// The configuration field that failed validation, if any.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}
