use config::{Config, Environment, File};
use roster_domain::constants::{DEFAULT_RETRIES, DEFAULT_TIMEOUT};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Errors produced by configuration construction and loading.
#[roster_derive::roster_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Load { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Invalid configuration{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Immutable settings shared by registries.
///
/// Invariants are enforced at construction: `timeout` must be positive, and
/// `retries` cannot go negative because of its unsigned type. Construction is
/// all-or-nothing; a partially-valid value is never observable. The value is
/// `Copy`, so one configuration can back any number of registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    timeout: u64,
    retries: u32,
    debug: bool,
}

impl RegistryConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] tagged `"timeout"` when `timeout`
    /// is zero.
    ///
    /// # Example
    /// ```rust
    /// use roster_kernel::config::RegistryConfig;
    ///
    /// let cfg = RegistryConfig::new(60, 5).unwrap();
    /// assert_eq!(cfg.timeout(), 60);
    /// assert!(RegistryConfig::new(0, 5).is_err());
    /// ```
    pub fn new(timeout: u64, retries: u32) -> Result<Self, ConfigError> {
        Self { timeout, retries, debug: false }.validated()
    }

    /// Toggles verbose diagnostic logging.
    #[must_use]
    pub const fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Operation timeout in seconds.
    ///
    /// Declared configuration surface; no registry operation consults it.
    #[must_use]
    pub const fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Number of retry attempts.
    ///
    /// Declared configuration surface; no registry operation consults it.
    #[must_use]
    pub const fn retries(&self) -> u32 {
        self.retries
    }

    /// Whether verbose diagnostics are enabled.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Loads a configuration via [`load_config`] and validates it.
    ///
    /// # Errors
    /// Returns [`ConfigError::Load`] if the source cannot be read or does not
    /// match the structure, and [`ConfigError::Invalid`] if loaded values
    /// violate the construction invariants.
    pub fn load(path: Option<impl AsRef<Path>>) -> Result<Self, ConfigError> {
        load_config::<Self>(path)?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.timeout == 0 {
            return Err(ConfigError::Invalid {
                message: "Timeout must be positive".into(),
                context: Some("timeout".into()),
            });
        }

        Ok(self)
    }
}

// --- Default ---

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { timeout: DEFAULT_TIMEOUT, retries: DEFAULT_RETRIES, debug: false }
    }
}

/// A reusable configuration loader that combines file-based settings with
/// environment overrides.
///
/// Layering, lowest to highest precedence:
/// 1. **Base file**: settings from `path` in any format the `config` crate
///    understands (TOML, JSON, ...). When no path is given, only the
///    environment layer applies.
/// 2. **Environment overrides**: variables prefixed with `ROSTER__`, using
///    `__` as the nesting separator (e.g. `ROSTER__TIMEOUT` maps to
///    `timeout`).
///
/// # Errors
/// Returns [`ConfigError::Load`] if the file is missing, a layer is
/// malformed, or deserialization into `T` fails.
///
/// # Example
/// ```rust
/// use roster_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     workers: u16,
/// }
///
/// let cfg: AppConfig = load_config(None::<&str>).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();

    if let Some(path) = path {
        let path = path.as_ref();
        info!("Loading config from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(
        Environment::with_prefix("ROSTER").separator("__").convert_case(config::Case::Snake),
    );

    builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
