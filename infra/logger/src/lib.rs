//! # Logger
//!
//! `tracing` setup shared by the workspace binaries.
//!
//! * Output goes to **stderr**; stdout stays free for the tool's own documents.
//! * An optional log directory adds a non-blocking rolling file beside stderr.
//! * In [`LogFormat::Text`], fields whose name looks secret (see [`is_sensitive_field`])
//!   are printed as `[REDACTED]`. Payload values are wrapped in [`Redacted`] at the call
//!   site, which holds for both formats.
//! * `RUST_LOG` is honoured unless explicit directives are set.
//!
//! ## Example
//!
//! ```rust
//! use sconf_logger::{LevelFilter, Logger, Redacted};
//!
//! let _logger = Logger::builder("sconf").level(LevelFilter::DEBUG).init().unwrap();
//!
//! tracing::debug!(payload = %Redacted::new("{\"pass\":\"123456\"}"), "Payload received");
//! tracing::debug!(api_token = "abc", "Printed as api_token=[REDACTED]");
//! ```

mod error;
mod fields;
mod redact;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::redact::{Redacted, SENSITIVE_FIELD_MARKERS, is_sensitive_field};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::marker::PhantomData;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

/// Encoding used by every sink of one logger.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line text with redacted sensitive fields.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Builder state: stderr only.
#[derive(Debug)]
pub struct StderrOnly;

/// Builder state: a rolling log directory is configured.
#[derive(Debug)]
pub struct WithFiles;

#[derive(Debug)]
struct FileSink {
    dir: PathBuf,
    rotation: Rotation,
    max_files: usize,
}

impl FileSink {
    fn open(&self, name: &str) -> Result<(NonBlocking, WorkerGuard), LoggerError> {
        std::fs::create_dir_all(&self.dir)
            .context(format!("Creating {}", self.dir.display()))?;

        let appender = RollingFileAppender::builder()
            .rotation(self.rotation.clone())
            .filename_prefix(name)
            .filename_suffix(LOG_FILE_SUFFIX)
            .max_log_files(self.max_files)
            .build(&self.dir)
            .context(format!("Opening log files in {}", self.dir.display()))?;

        Ok(tracing_appender::non_blocking(appender))
    }
}

/// Configures the global subscriber; [`LoggerBuilder::log_dir`] unlocks the file options.
#[derive(Debug)]
#[must_use = "call `init` to install the subscriber"]
pub struct LoggerBuilder<S = StderrOnly> {
    name: String,
    level: LevelFilter,
    directives: Option<String>,
    format: LogFormat,
    stderr: bool,
    file: Option<FileSink>,
    state: PhantomData<S>,
}

impl<S> LoggerBuilder<S> {
    /// Minimum level when neither directives nor `RUST_LOG` say otherwise.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Explicit filter directives such as `sconf_ingest=debug`; these replace `RUST_LOG`.
    pub fn directives(mut self, directives: impl Into<String>) -> Self {
        self.directives = Some(directives.into());
        self
    }

    pub const fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Turns the stderr sink off, e.g. when only the log directory is wanted.
    pub const fn stderr(mut self, enabled: bool) -> Self {
        self.stderr = enabled;
        self
    }

    /// Installs the subscriber.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, bad directives, no sink,
    ///   or `max_files == 0`.
    /// * [`LoggerError::Io`] / [`LoggerError::Appender`] if the log directory is unusable.
    /// * [`LoggerError::Subscriber`] if a global subscriber already exists.
    pub fn init(self) -> Result<Logger, LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::invalid("Logger name cannot be empty"));
        }
        if !self.stderr && self.file.is_none() {
            return Err(LoggerError::invalid("No sink enabled: keep stderr or set a log directory"));
        }
        if self.file.as_ref().is_some_and(|file| file.max_files == 0) {
            return Err(LoggerError::invalid("max_files must be greater than zero"));
        }

        let filter = self.env_filter()?;
        let mut layers = Vec::new();

        if self.stderr {
            layers.push(sink(std::io::stderr, self.format, true));
        }

        let guard = match &self.file {
            Some(file) => {
                let (writer, guard) = file.open(&self.name)?;
                layers.push(sink(writer, self.format, false));
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(layers)
            .try_init()
            .context("A global subscriber is already installed")?;

        Ok(Logger { guard })
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.directives {
            Some(directives) => builder.parse(directives).map_err(|e| {
                LoggerError::invalid(format!("Invalid filter directives '{directives}': {e}"))
            }),
            None => Ok(builder.from_env_lossy()),
        }
    }
}

impl LoggerBuilder<StderrOnly> {
    /// Also writes to rolling files `<name>.<date>.log` in `dir` (created if missing).
    pub fn log_dir(self, dir: impl Into<PathBuf>) -> LoggerBuilder<WithFiles> {
        LoggerBuilder {
            name: self.name,
            level: self.level,
            directives: self.directives,
            format: self.format,
            stderr: self.stderr,
            file: Some(FileSink {
                dir: dir.into(),
                rotation: Rotation::DAILY,
                max_files: DEFAULT_MAX_FILES,
            }),
            state: PhantomData,
        }
    }
}

impl LoggerBuilder<WithFiles> {
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = &mut self.file {
            file.rotation = rotation;
        }
        self
    }

    /// Rotated files kept on disk, at least one.
    pub fn max_files(mut self, max_files: usize) -> Self {
        if let Some(file) = &mut self.file {
            file.max_files = max_files;
        }
        self
    }
}

fn sink<S, W>(writer: W, format: LogFormat, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(ansi);
    match format {
        LogFormat::Text => layer.compact().fmt_fields(fields::redacting()).boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// Handle of the installed subscriber.
///
/// Keep it alive until the program ends: dropping it flushes and stops the file writer.
#[must_use = "dropping the logger stops the file writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder; `name` prefixes rolling log files (e.g. `sconf.2026-10-19.log`).
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            level: LevelFilter::INFO,
            directives: None,
            format: LogFormat::Text,
            stderr: true,
            file: None,
            state: PhantomData,
        }
    }

    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_builder_defaults() {
        let builder = Logger::builder("sconf");
        assert!(builder.stderr);
        assert!(builder.file.is_none());
        assert_eq!(builder.format, LogFormat::Text);
        assert_eq!(builder.level, LevelFilter::INFO);
    }

    #[test]
    fn test_log_dir_sets_file_defaults() {
        let builder = Logger::builder("sconf")
            .format(LogFormat::Json)
            .log_dir("logs")
            .rotation(Rotation::NEVER)
            .max_files(3);

        let file = builder.file.as_ref().unwrap();
        assert_eq!(file.dir, PathBuf::from("logs"));
        assert_eq!(file.rotation, Rotation::NEVER);
        assert_eq!(file.max_files, 3);
        assert_eq!(builder.format, LogFormat::Json);
    }

    #[test]
    #[serial]
    fn test_rejects_invalid_configuration() {
        let cases = [
            Logger::builder("  ").init(),
            Logger::builder("sconf").stderr(false).init(),
            Logger::builder("sconf").directives("sconf=notalevel").init(),
        ];
        for result in cases {
            assert_eq!(result.unwrap_err().kind(), "InvalidConfigurationError");
        }

        let err = Logger::builder("sconf").log_dir(std::env::temp_dir()).max_files(0).init();
        assert!(matches!(err, Err(LoggerError::InvalidConfiguration { .. })));
    }
}
