//! # Sanitization
//!
//! Turns a [`RawInput`] into a [`SanitizedConfiguration`] in two stages:
//!
//! 1. **Reserved-key rejection**: [`KeyGuard`] fails the whole payload if it is not a
//!    plain object or carries `__proto__`, `constructor` or `prototype` at any depth.
//! 2. **Allowlist copy**: only keys that exist on [`Configuration`] are read, each onto a
//!    fresh copy of the caller's defaults. Unknown keys are counted and dropped.
//!
//! The allowlist is the real guarantee; the first stage makes hostile input fail loudly
//! instead of being silently dropped.
//!
//! ## Invalid values
//! In [`ValidationMode::Lenient`] an unacceptable `appearance`, `locale` or `version`
//! falls back to the default value of that field. In [`ValidationMode::Strict`] it fails
//! with [`IngestError::Validation`].

use crate::error::IngestError;
use crate::raw::RawInput;
use sconf_domain::config::{Appearance, Configuration, Locale};
use sconf_domain::constants::{APPEARANCE, DEFAULT_MAX_DEPTH, LOCALE, VERSION};
use sconf_domain::settings::{IngestSettings, ValidationMode};
use sconf_kernel::security::KeyGuard;
use sconf_kernel::security::keys::type_name;
use sconf_logger::{Redacted, is_sensitive_field};
use serde::Serialize;
use serde_json::{Value, json};
use std::borrow::Cow;
use std::ops::Deref;
use tracing::{debug, warn};

/// A configuration that went through [`sanitize`]; immutable once created.
///
/// There is no public constructor, so holding one proves the value was validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SanitizedConfiguration(Configuration);

impl SanitizedConfiguration {
    #[must_use]
    pub const fn as_config(&self) -> &Configuration {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Configuration {
        self.0
    }

    /// Re-encodes the configuration as untrusted input, e.g. to feed it through
    /// [`sanitize`] again.
    #[must_use]
    pub fn to_raw(&self) -> RawInput {
        RawInput::from_value(json!({
            APPEARANCE: self.0.appearance.as_str(),
            LOCALE: self.0.locale.as_str(),
            VERSION: self.0.version,
        }))
    }
}

impl Deref for SanitizedConfiguration {
    type Target = Configuration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Merges `raw` onto a copy of `defaults` with fallback semantics for invalid values.
///
/// # Errors
/// Returns [`IngestError::Pollution`] when `raw` is not a plain object or carries a
/// reserved key.
pub fn sanitize(
    raw: &RawInput,
    defaults: &Configuration,
) -> Result<SanitizedConfiguration, IngestError> {
    merge(raw, defaults, ValidationMode::Lenient, DEFAULT_MAX_DEPTH)
}

/// Like [`sanitize`], with defaults, validation mode and depth bound taken from `settings`.
///
/// # Errors
/// * [`IngestError::Pollution`] when `raw` is not a plain object, carries a reserved key,
///   or nests deeper than `settings.max_depth`.
/// * [`IngestError::Validation`] in strict mode, for the first invalid field.
pub fn sanitize_with(
    raw: &RawInput,
    settings: &IngestSettings,
) -> Result<SanitizedConfiguration, IngestError> {
    merge(raw, &settings.defaults, settings.mode, settings.max_depth)
}

fn merge(
    raw: &RawInput,
    defaults: &Configuration,
    mode: ValidationMode,
    max_depth: usize,
) -> Result<SanitizedConfiguration, IngestError> {
    let map = KeyGuard::new(max_depth).verify(raw.as_value()).inspect_err(|err| {
        warn!(kind = err.kind(), reason = %err, "Rejected configuration payload");
    })?;

    let (known, unknown): (Vec<_>, Vec<_>) =
        map.iter().partition(|(key, _)| Configuration::has_field(key));
    if !unknown.is_empty() {
        let sensitive = unknown.iter().filter(|(key, _)| is_sensitive_field(key)).count();
        debug!(ignored = unknown.len(), sensitive, "Ignoring unrecognised configuration keys");
    }

    let mut merged = defaults.clone();
    for (key, value) in known {
        match key.as_str() {
            APPEARANCE => {
                merged.appearance =
                    resolve(APPEARANCE, appearance(value), defaults.appearance, mode)?;
            },
            LOCALE => {
                merged.locale = resolve(LOCALE, locale(value), defaults.locale.clone(), mode)?;
            },
            VERSION => {
                merged.version = resolve(VERSION, version(value), defaults.version, mode)?;
            },
            _ => {},
        }
    }

    Ok(SanitizedConfiguration(merged))
}

/// Applies the validation mode to the outcome of reading one field.
fn resolve<T>(
    field: &'static str,
    read: Result<T, Rejection<'_>>,
    fallback: T,
    mode: ValidationMode,
) -> Result<T, IngestError> {
    let rejection = match read {
        Ok(value) => return Ok(value),
        Err(rejection) => rejection,
    };

    match mode {
        ValidationMode::Lenient => {
            match rejection.text {
                Some(text) => debug!(
                    field,
                    reason = %rejection.reason,
                    value = %Redacted::new(text),
                    "Invalid value replaced by default"
                ),
                None => debug!(field, reason = %rejection.reason, "Invalid value replaced by default"),
            }
            Ok(fallback)
        },
        ValidationMode::Strict => {
            Err(IngestError::Validation { field, reason: rejection.reason, context: None })
        },
    }
}

/// Why a field value was not accepted, plus the offending text for redacted logging.
struct Rejection<'a> {
    reason: Cow<'static, str>,
    text: Option<&'a str>,
}

impl<'a> Rejection<'a> {
    fn wrong_type(expected: &'static str, value: &'a Value) -> Self {
        Self { reason: format!("expected {expected}, got {}", type_name(value)).into(), text: None }
    }

    fn invalid(reason: impl ToString, text: &'a str) -> Self {
        Self { reason: reason.to_string().into(), text: Some(text) }
    }
}

fn appearance(value: &Value) -> Result<Appearance, Rejection<'_>> {
    let Value::String(text) = value else {
        return Err(Rejection::wrong_type("a string", value));
    };
    text.parse().map_err(|err| Rejection::invalid(err, text))
}

fn locale(value: &Value) -> Result<Locale, Rejection<'_>> {
    let Value::String(text) = value else {
        return Err(Rejection::wrong_type("a string", value));
    };
    Locale::parse(text).map_err(|err| Rejection::invalid(err, text))
}

fn version(value: &Value) -> Result<f64, Rejection<'_>> {
    value
        .as_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Rejection::wrong_type("a finite number", value))
}
