use std::borrow::Cow;

/// Failure surface of [`LoggerBuilder::init`](crate::LoggerBuilder::init).
///
/// Each variant maps to one stage of subscriber setup, so callers can tell a
/// filesystem problem apart from a directive typo or a double install.
#[roster_derive::roster_error]
pub enum LoggerError {
    /// The log directory could not be created.
    #[error("Log directory error{}: {source}", format_context(.context))]
    Directory { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The rolling appender rejected its settings (prefix, suffix, or path).
    #[error("File appender error{}: {source}", format_context(.context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// A filter directive did not parse.
    #[error("Filter directive error{}: {source}", format_context(.context))]
    Filter {
        source: tracing_subscriber::filter::ParseError,
        context: Option<Cow<'static, str>>,
    },

    /// Another subscriber already owns this process.
    #[error("Subscriber install error{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    /// The builder settings describe nothing usable.
    #[error("Logger configuration error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
