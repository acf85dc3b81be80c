use sconf_domain::constants::DEFAULT_MAX_DEPTH;
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Keys that address object-model machinery (prototype chain, constructor reference)
/// rather than data on hosts with prototype-based objects.
pub const RESERVED_KEYS: &[&str] = &["__proto__", "constructor", "prototype"];

/// Errors raised while scanning an untrusted payload.
///
/// Only fixed strings and counters are carried; nothing taken from the payload itself.
#[sconf_derive::sconf_error]
pub enum KeyGuardError {
    #[error("Payload must be a JSON object, got {found}{}", format_context(.context))]
    NotAnObject { found: &'static str, context: Option<Cow<'static, str>> },

    #[error("Reserved key '{key}' found at depth {depth}{}", format_context(.context))]
    ReservedKey { key: &'static str, depth: usize, context: Option<Cow<'static, str>> },

    #[error("Payload nesting exceeds {max_depth} levels{}", format_context(.context))]
    TooDeep { max_depth: usize, context: Option<Cow<'static, str>> },
}

/// Rejects payloads that carry reserved keys anywhere in their structure.
///
/// This is the blacklist half of the two-stage ingestion guard: it documents intent and
/// fails loudly on known-dangerous input. The allowlist copy that follows it is what
/// actually keeps unknown keys out of a configuration.
#[derive(Debug, Clone, Copy)]
pub struct KeyGuard {
    max_depth: usize,
}

impl Default for KeyGuard {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl KeyGuard {
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Returns the reserved key matching `key`, if any.
    #[must_use]
    pub fn reserved(key: &str) -> Option<&'static str> {
        RESERVED_KEYS.iter().copied().find(|reserved| *reserved == key)
    }

    /// Checks that `value` is a JSON object free of reserved keys at any depth.
    ///
    /// # Returns
    /// The top-level object, so callers can continue with a plain map.
    ///
    /// # Errors
    /// * [`KeyGuardError::NotAnObject`] for null, primitives and arrays.
    /// * [`KeyGuardError::ReservedKey`] naming the first reserved key met.
    /// * [`KeyGuardError::TooDeep`] when nesting exceeds the configured bound.
    pub fn verify<'a>(&self, value: &'a Value) -> Result<&'a Map<String, Value>, KeyGuardError> {
        let Value::Object(map) = value else {
            return Err(KeyGuardError::NotAnObject {
                found: type_name(value),
                context: Some("Top-level payload".into()),
            });
        };

        self.scan_object(map, 0)?;
        Ok(map)
    }

    fn scan_object(&self, map: &Map<String, Value>, depth: usize) -> Result<(), KeyGuardError> {
        // Reject on keys before descending, so a sibling cannot mask the finding.
        if let Some(key) = map.keys().find_map(|key| Self::reserved(key)) {
            return Err(KeyGuardError::ReservedKey { key, depth, context: None });
        }

        map.values().try_for_each(|child| self.scan_value(child, depth + 1))
    }

    fn scan_value(&self, value: &Value, depth: usize) -> Result<(), KeyGuardError> {
        match value {
            Value::Object(_) | Value::Array(_) if depth > self.max_depth => {
                Err(KeyGuardError::TooDeep { max_depth: self.max_depth, context: None })
            },
            Value::Object(map) => self.scan_object(map, depth),
            Value::Array(items) => items.iter().try_for_each(|item| self.scan_value(item, depth + 1)),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(()),
        }
    }
}

/// JSON type name used in error messages.
#[must_use]
pub const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reserved_lookup() {
        assert_eq!(KeyGuard::reserved("__proto__"), Some("__proto__"));
        assert_eq!(KeyGuard::reserved("constructor"), Some("constructor"));
        assert_eq!(KeyGuard::reserved("prototype"), Some("prototype"));
        assert_eq!(KeyGuard::reserved("Constructor"), None);
        assert_eq!(KeyGuard::reserved("proto"), None);
    }

    #[test]
    fn test_non_objects_are_rejected() {
        let guard = KeyGuard::default();
        for (value, found) in [
            (json!(null), "null"),
            (json!(true), "boolean"),
            (json!(1), "number"),
            (json!("x"), "string"),
            (json!([{ "appearance": "dark" }]), "array"),
        ] {
            let err = guard.verify(&value).unwrap_err();
            assert!(
                matches!(err, KeyGuardError::NotAnObject { found: f, .. } if f == found),
                "unexpected error for {found}: {err}"
            );
        }
    }

    #[test]
    fn test_nested_reserved_key_reports_depth() {
        let guard = KeyGuard::default();
        let err = guard.verify(&json!({ "a": [{ "b": { "prototype": 1 } }] })).unwrap_err();
        assert!(matches!(err, KeyGuardError::ReservedKey { key: "prototype", depth: 3, .. }));
    }

    #[test]
    fn test_depth_bound() {
        let guard = KeyGuard::new(2);
        assert!(guard.verify(&json!({ "a": { "b": 1 } })).is_ok());
        assert!(guard.verify(&json!({ "a": { "b": {} } })).is_ok());
        let err = guard.verify(&json!({ "a": { "b": { "c": {} } } })).unwrap_err();
        assert!(matches!(err, KeyGuardError::TooDeep { max_depth: 2, .. }));
    }
}
