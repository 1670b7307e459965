//! Tracing bootstrap for applications built on the workspace crates.
//!
//! Library crates emit diagnostics through the `tracing` macros and never
//! touch global subscriber state; a composing binary calls into this crate
//! once, at startup, to decide where those events end up.
//!
//! Two outputs can be layered independently:
//!
//! * a compact, colored console layer, and
//! * a rolling log file behind a non-blocking writer, optionally formatted
//!   as JSON lines for ingestion.
//!
//! Event selection starts from a default level. Without explicit directives
//! the `RUST_LOG` variable is honored (leniently; unreadable segments are
//! dropped); with [`LoggerBuilder::directives`] the given directive set is
//! parsed strictly and a typo fails [`LoggerBuilder::init`] instead of being
//! silently ignored.
//!
//! ```rust,no_run
//! use roster_logger::{LevelFilter, Logger, Rotation};
//!
//! # fn main() -> Result<(), roster_logger::LoggerError> {
//! let logger = Logger::builder()
//!     .name("roster")
//!     .level(LevelFilter::DEBUG)
//!     .file("logs")
//!     .rotation(Rotation::HOURLY)
//!     .init()?;
//!
//! tracing::info!("registry online");
//! drop(logger); // flushes the file worker
//! # Ok(())
//! # }
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;

use private::Sealed;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Rolling files kept per sink when the caller does not say otherwise.
const DEFAULT_MAX_FILES: usize = 10;
/// Extension given to every rolling log file.
const FILE_SUFFIX: &str = "log";

/// Marker: no name chosen yet; [`LoggerBuilder::init`] is unavailable.
#[derive(Debug)]
pub struct NoName;
/// Marker: the logger has a name (it doubles as the file prefix).
#[derive(Debug)]
pub struct WithName(String);
/// Marker: no file sink configured; the file knobs are unavailable.
#[derive(Debug)]
pub struct NoFile;
/// Marker: a file sink is configured.
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Sink-independent settings shared by every builder state.
#[derive(Debug)]
struct Settings {
    level: LevelFilter,
    directives: Option<String>,
    console: bool,
    file: Option<FileOutput>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { level: LevelFilter::INFO, directives: None, console: true, file: None }
    }
}

impl Settings {
    /// Builds the event filter: strict parsing for explicit directives,
    /// lenient `RUST_LOG` lookup otherwise.
    fn filter(&self) -> Result<EnvFilter, LoggerError> {
        let base = EnvFilter::builder().with_default_directive(self.level.into());

        match &self.directives {
            Some(directives) => base.parse(directives).context(format!("'{directives}'")),
            None => Ok(base.from_env_lossy()),
        }
    }
}

/// Settings for the rolling file sink; present only behind [`WithFile`].
#[derive(Debug)]
struct FileOutput {
    directory: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl FileOutput {
    fn new(directory: PathBuf) -> Self {
        Self { directory, rotation: Rotation::DAILY, max_files: DEFAULT_MAX_FILES, json: false }
    }

    /// Creates the directory and starts the non-blocking writer; the returned
    /// guard flushes and parks the worker thread when dropped.
    fn into_writer(self, prefix: &str) -> Result<(NonBlocking, WorkerGuard), LoggerError> {
        fs::create_dir_all(&self.directory)
            .context(format!("Creating {}", self.directory.display()))?;

        let appender = RollingFileAppender::builder()
            .rotation(self.rotation)
            .filename_prefix(prefix)
            .filename_suffix(FILE_SUFFIX)
            .max_log_files(self.max_files)
            .build(&self.directory)?;

        Ok(tracing_appender::non_blocking(appender))
    }
}

/// Assembles and installs the process-global `tracing` subscriber.
///
/// The two type parameters make misuse unrepresentable: [`init`](Self::init)
/// appears only after [`name`](Self::name), and the file knobs
/// ([`rotation`](Self::rotation), [`max_files`](Self::max_files),
/// [`json`](Self::json)) only after [`file`](Self::file).
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    settings: Settings,
    name: N,
    _file: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Names the logger. The name becomes the rolling-file prefix, so keep
    /// it short and path-safe.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { settings: self.settings, name: WithName(name.into()), _file: PhantomData }
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Default level for events no directive says anything about.
    #[must_use = "settings apply only once init() is called"]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.settings.level = level;
        self
    }

    /// Replaces the `RUST_LOG` lookup with an explicit directive set, e.g.
    /// `"roster_registry=debug,roster_batch=warn"`.
    ///
    /// Unlike `RUST_LOG`, explicit directives are parsed strictly:
    /// [`init`](Self::init) fails on the first malformed directive.
    #[must_use = "settings apply only once init() is called"]
    pub fn directives(mut self, directives: impl Into<String>) -> Self {
        self.settings.directives = Some(directives.into());
        self
    }

    /// Turns the console layer on or off (on by default).
    #[must_use = "settings apply only once init() is called"]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.settings.console = enabled;
        self
    }

    /// Adds a rolling file sink under `directory` and unlocks the file knobs.
    pub fn file(self, directory: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut settings = self.settings;
        settings.file = Some(FileOutput::new(directory.into()));
        LoggerBuilder { settings, name: self.name, _file: PhantomData }
    }

    /// Installs the configured subscriber as the process-global default.
    ///
    /// Hold the returned [`Logger`] for as long as events may still be
    /// emitted: it owns the file worker, and dropping it flushes whatever
    /// the worker still buffers.
    ///
    /// # Errors
    /// Returns [`LoggerError::Config`] for a blank name, zero file retention,
    /// or every output disabled.
    /// Returns [`LoggerError::Filter`] for malformed
    /// [`directives`](Self::directives).
    /// Returns [`LoggerError::Directory`] or [`LoggerError::Appender`] if the
    /// file sink could not be set up.
    /// Returns [`LoggerError::Subscriber`] if another subscriber is already
    /// installed in this process.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let prefix = self.name.0.trim();
        if prefix.is_empty() {
            return Err(config_error("logger name must not be blank"));
        }
        if !self.settings.console && self.settings.file.is_none() {
            return Err(config_error(
                "all outputs disabled; enable the console or add a file sink",
            ));
        }
        if self.settings.file.as_ref().is_some_and(|file| file.max_files == 0) {
            return Err(config_error("file retention must keep at least one file"));
        }

        let filter = self.settings.filter()?;

        let mut layers = Vec::new();
        if self.settings.console {
            layers.push(fmt::layer().compact().with_ansi(true).boxed());
        }

        let guard = match self.settings.file {
            Some(output) => {
                let as_json = output.json;
                let (writer, guard) = output.into_writer(prefix)?;
                let file_layer = fmt::layer().with_writer(writer).with_ansi(false);
                layers.push(if as_json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Rotation cadence for the file sink (daily by default).
    #[must_use = "settings apply only once init() is called"]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = &mut self.settings.file {
            file.rotation = rotation;
        }
        self
    }

    /// How many rotated files to keep before the oldest is removed.
    #[must_use = "settings apply only once init() is called"]
    pub fn max_files(mut self, max_files: usize) -> Self {
        if let Some(file) = &mut self.settings.file {
            file.max_files = max_files;
        }
        self
    }

    /// Switches the file sink from plain text to JSON lines.
    #[must_use = "settings apply only once init() is called"]
    pub fn json(mut self) -> Self {
        if let Some(file) = &mut self.settings.file {
            file.json = true;
        }
        self
    }
}

/// Handle to the installed logging pipeline.
///
/// Owns the worker guard for file output, when one is configured. Keep it
/// alive until shutdown; dropping it flushes buffered records and stops the
/// worker thread.
#[must_use = "dropping the handle stops the background log writer"]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a fresh [`LoggerBuilder`].
    ///
    /// The builder needs at least a name before it can install anything; the
    /// name doubles as the rolling-file prefix (a logger named `roster`
    /// writes `roster.2026-08-25.log` under the configured directory).
    ///
    /// ```rust
    /// use roster_logger::{LevelFilter, Logger};
    ///
    /// # fn main() -> Result<(), roster_logger::LoggerError> {
    /// let _logger = Logger::builder().name("roster").level(LevelFilter::DEBUG).init()?;
    /// # Ok(())
    /// # }
    /// ```
    #[must_use = "the builder does nothing until init() is called"]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { settings: Settings::default(), name: NoName, _file: PhantomData }
    }

    /// Emits a flush marker through the pipeline.
    ///
    /// The actual file flush happens when this handle (and with it the
    /// worker guard) is dropped; the marker makes that point findable in
    /// the output.
    pub fn flush(&self) {
        tracing::debug!("flush requested");
    }

    /// The file worker guard, when a file sink was configured.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("detaching file log worker");
        }
    }
}

fn config_error(message: &'static str) -> LoggerError {
    LoggerError::Config { message: message.into(), context: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn builder_starts_with_console_only_defaults() {
        let builder = Logger::builder().name("roster");

        assert!(builder.settings.console);
        assert_eq!(builder.settings.level, LevelFilter::INFO);
        assert!(builder.settings.directives.is_none());
        assert!(builder.settings.file.is_none());
    }

    #[test]
    fn file_knobs_land_in_the_file_settings() {
        let builder = Logger::builder()
            .name("roster")
            .directives("roster_registry=debug")
            .file("logs/roster")
            .rotation(Rotation::HOURLY)
            .max_files(3)
            .json();

        assert_eq!(builder.settings.directives.as_deref(), Some("roster_registry=debug"));

        let file = builder.settings.file.expect("file sink configured");
        assert_eq!(file.directory, Path::new("logs/roster"));
        assert_eq!(file.max_files, 3);
        assert!(file.json);
    }

    #[test]
    fn blank_names_are_rejected() {
        let err = Logger::builder().name("   ").init().unwrap_err();

        assert!(matches!(err, LoggerError::Config { .. }));
    }

    #[test]
    fn disabling_every_output_is_rejected() {
        let err = Logger::builder().name("roster").console(false).init().unwrap_err();

        assert!(matches!(err, LoggerError::Config { .. }));
    }

    #[test]
    fn zero_file_retention_is_rejected() {
        let err = Logger::builder().name("roster").file("logs").max_files(0).init().unwrap_err();

        assert!(matches!(err, LoggerError::Config { .. }));
    }

    #[test]
    fn malformed_directives_are_rejected() {
        let err = Logger::builder()
            .name("roster")
            .directives("roster==debug==nonsense")
            .init()
            .unwrap_err();

        assert!(matches!(err, LoggerError::Filter { .. }));
    }
}
