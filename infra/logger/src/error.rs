use std::borrow::Cow;
use tracing_appender::rolling::InitError;
use tracing_subscriber::util::TryInitError;

/// Failures while installing the global subscriber.
#[sconf_derive::sconf_error]
pub enum LoggerError {
    #[error("Cannot open rolling log file{}: {source}", format_context(.context))]
    Appender { source: InitError, context: Option<Cow<'static, str>> },

    /// A global subscriber is already installed in this process.
    #[error("Cannot install tracing subscriber{}: {source}", format_context(.context))]
    Subscriber { source: TryInitError, context: Option<Cow<'static, str>> },

    #[error("Log directory unavailable{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid logger configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl LoggerError {
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidConfiguration { message: message.into(), context: None }
    }
}
