//! JSON documents written to stdout.

use sconf::ingest::IngestError;
use serde::Serialize;
use std::io::Write;
use std::process::ExitCode;

/// Exit code for failures that are not ingestion errors (settings, I/O).
const EXIT_OTHER: u8 = 1;

#[derive(Debug, Serialize)]
struct ErrorDocument<'a> {
    error: ErrorBody<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    kind: &'a str,
    message: String,
}

/// Writes `value` as one pretty-printed JSON document.
pub(crate) fn write_json(value: &impl Serialize) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Reports an ingestion failure and maps it to its exit code.
pub(crate) fn ingest_failure(err: &IngestError) -> anyhow::Result<ExitCode> {
    let code = match err {
        IngestError::Parse { .. } => 2,
        IngestError::Pollution { .. } => 3,
        IngestError::Validation { .. } => 4,
        IngestError::Internal { .. } => EXIT_OTHER,
    };
    failure(err.kind(), err, code)
}

/// Reports any other failure with exit code 1.
pub(crate) fn other_failure(kind: &str, err: &dyn std::fmt::Display) -> anyhow::Result<ExitCode> {
    failure(kind, err, EXIT_OTHER)
}

fn failure(kind: &str, err: &dyn std::fmt::Display, code: u8) -> anyhow::Result<ExitCode> {
    write_json(&ErrorDocument { error: ErrorBody { kind, message: err.to_string() } })?;
    Ok(ExitCode::from(code))
}
