use crate::args::CheckArgs;
use crate::output::{ingest_failure, other_failure, write_json};
use sconf::domain::settings::{IngestSettings, ValidationMode};
use sconf::ingest::Ingestor;
use sconf::kernel::config::{ConfigError, load_config, load_config_or_default};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};

/// Runs the ingestion pipeline on one payload.
///
/// # Errors
/// Only fails when stdout cannot be written; every other problem is reported as a JSON
/// error document and a non-zero exit code.
pub(crate) fn check(args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let mut settings = match settings(args.settings.as_deref()) {
        Ok(settings) => settings,
        Err(err) => return other_failure(err.kind(), &err),
    };
    if args.strict {
        settings.mode = ValidationMode::Strict;
    }

    let payload = match read_payload(args) {
        Ok(payload) => payload,
        Err(err) => return other_failure("IoError", &err),
    };

    match Ingestor::new(settings).ingest_bytes(&payload) {
        Ok(ingested) => {
            info!(style = %ingested.view.style, code = %ingested.view.code, "Payload accepted");
            write_json(&ingested)?;
            Ok(ExitCode::SUCCESS)
        },
        Err(err) => ingest_failure(&err),
    }
}

/// Prints the defaults payloads would be merged onto.
///
/// # Errors
/// Only fails when stdout cannot be written.
pub(crate) fn defaults(path: Option<&Path>) -> anyhow::Result<ExitCode> {
    match settings(path) {
        Ok(settings) => {
            write_json(&settings.defaults)?;
            Ok(ExitCode::SUCCESS)
        },
        Err(err) => other_failure(err.kind(), &err),
    }
}

/// An explicit settings file must exist; the implicit `./sconf.*` is optional.
fn settings(path: Option<&Path>) -> Result<IngestSettings, ConfigError> {
    match path {
        Some(path) => load_config(Some(path)),
        None => load_config_or_default(None::<&Path>),
    }
}

/// Raw bytes of the payload; decoding is left to the ingestor so bad UTF-8 is a parse error.
fn read_payload(args: &CheckArgs) -> std::io::Result<Vec<u8>> {
    if let Some(payload) = &args.payload {
        debug!(source = "argument", bytes = payload.len(), "Payload read");
        return Ok(payload.clone().into_bytes());
    }

    let payload = match &args.file {
        Some(file) => std::fs::read(file).map_err(|e| {
            std::io::Error::new(e.kind(), format!("Failed to read {}: {e}", file.display()))
        })?,
        None => {
            let mut payload = Vec::new();
            std::io::stdin().lock().read_to_end(&mut payload)?;
            payload
        },
    };

    debug!(source = if args.file.is_some() { "file" } else { "stdin" }, bytes = payload.len(), "Payload read");
    Ok(payload)
}
