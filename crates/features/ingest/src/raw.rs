use crate::error::{IngestError, IngestErrorExt};
use sconf_kernel::security::keys::type_name;
use sconf_logger::Redacted;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// An untrusted, dynamically shaped value decoded from an external payload.
///
/// Nothing about its shape is assumed. `Debug` only reveals the JSON type and size so the
/// value cannot end up in a log by accident.
#[derive(Clone, PartialEq)]
pub struct RawInput(Value);

impl RawInput {
    #[must_use]
    pub const fn from_value(value: Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for RawInput {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Debug for RawInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::Object(map) => write!(f, "RawInput(object, {} keys)", map.len()),
            Value::Array(items) => write!(f, "RawInput(array, {} items)", items.len()),
            other => write!(f, "RawInput({})", type_name(other)),
        }
    }
}

/// Deserializes an untrusted JSON payload.
///
/// # Errors
/// Returns [`IngestError::Parse`] when `raw_payload` is not well-formed JSON, including
/// empty and whitespace-only payloads.
pub fn parse(raw_payload: &str) -> Result<RawInput, IngestError> {
    debug!(payload = %Redacted::new(raw_payload), "Parsing configuration payload");

    let value = serde_json::from_str::<Value>(raw_payload).context("Payload is not valid JSON")?;

    Ok(RawInput(value))
}

/// Like [`parse`], for payloads that arrive as bytes (files, stdin).
///
/// # Errors
/// Returns [`IngestError::Parse`] when `raw_payload` is not well-formed JSON, which
/// includes invalid UTF-8 anywhere in it.
pub fn parse_slice(raw_payload: &[u8]) -> Result<RawInput, IngestError> {
    debug!(bytes = raw_payload.len(), "Parsing configuration payload");

    let value =
        serde_json::from_slice::<Value>(raw_payload).context("Payload is not valid UTF-8 JSON")?;

    Ok(RawInput(value))
}
