//! Text field formatting that never prints secret-looking fields.

use crate::redact::is_sensitive_field;
use std::fmt;
use tracing::field::Field;
use tracing_subscriber::field::MakeExt;
use tracing_subscriber::fmt::FormatFields;
use tracing_subscriber::fmt::format::{Writer, debug_fn};

const MESSAGE_FIELD: &str = "message";

/// `name=value` pairs separated by spaces; values of sensitive fields become `[REDACTED]`.
pub(crate) fn redacting() -> impl for<'writer> FormatFields<'writer> + Send + Sync + 'static {
    debug_fn(write_field).delimited(" ")
}

fn write_field(writer: &mut Writer<'_>, field: &Field, value: &dyn fmt::Debug) -> fmt::Result {
    let name = field.name();
    if name == MESSAGE_FIELD {
        write!(writer, "{value:?}")
    } else if is_sensitive_field(name) {
        write!(writer, "{name}=[REDACTED]")
    } else {
        write!(writer, "{name}={value:?}")
    }
}
