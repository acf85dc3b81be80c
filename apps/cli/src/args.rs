//! # CLI Argument Definitions
//!
//! Command-line surface of the `sconf` binary, declared with the `clap` derive API.

use clap::{Args, Parser, Subcommand, ValueEnum};
use sconf_logger::Rotation;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "sconf")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Validate untrusted configuration payloads")]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) logging: LoggingArgs,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Args)]
pub(crate) struct LoggingArgs {
    /// Emit debug logs on stderr
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    /// Write logs as JSON lines
    #[arg(long, global = true)]
    pub(crate) json_logs: bool,

    /// Also write logs to rolling files in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) log_dir: Option<PathBuf>,

    /// How often the log file in --log-dir rolls over
    #[arg(long, global = true, value_enum, default_value_t = LogRotation::Daily, requires = "log_dir")]
    pub(crate) log_rotation: LogRotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(value: LogRotation) -> Self {
        match value {
            LogRotation::Hourly => Self::HOURLY,
            LogRotation::Daily => Self::DAILY,
            LogRotation::Never => Self::NEVER,
        }
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Ingest one payload and print the sanitized configuration with its view
    Check(CheckArgs),
    /// Print the defaults that payloads are merged onto
    Defaults {
        /// Settings file (TOML, JSON or YAML); `./sconf.*` is used when present
        #[arg(short, long)]
        settings: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub(crate) struct CheckArgs {
    /// Payload given inline; read from stdin when neither this nor --file is set
    #[arg(short, long, conflicts_with = "file")]
    pub(crate) payload: Option<String>,

    /// Read the payload from a file
    #[arg(short, long)]
    pub(crate) file: Option<PathBuf>,

    /// Settings file (TOML, JSON or YAML); `./sconf.*` is used when present
    #[arg(short, long)]
    pub(crate) settings: Option<PathBuf>,

    /// Fail on invalid field values instead of falling back to defaults
    #[arg(long)]
    pub(crate) strict: bool,
}
