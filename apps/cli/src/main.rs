mod args;
mod commands;
mod output;

use crate::args::{Cli, Command};
use clap::Parser;
use sconf_logger::{LevelFilter, LogFormat, Logger};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.logging.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let format = if cli.logging.json_logs { LogFormat::Json } else { LogFormat::Text };
    let builder = Logger::builder(env!("CARGO_BIN_NAME")).level(level).format(format);
    let _logger = match &cli.logging.log_dir {
        Some(dir) => builder.log_dir(dir).rotation(cli.logging.log_rotation.into()).init()?,
        None => builder.init()?,
    };

    match cli.command {
        Command::Check(args) => commands::check(&args),
        Command::Defaults { settings } => commands::defaults(settings.as_deref()),
    }
}
